//! Task List Controller
//!
//! Owns one page of tasks plus the view state around it. Every mutation goes
//! to the server first and is followed by a reload of the current page; the
//! cached page is never edited locally.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, info, warn};

use crate::api::SharedTaskApi;
use crate::error::{ApiError, TaskAction};
use crate::models::{Filter, Task};
use crate::notify::Notifications;
use crate::session::Session;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct TaskListState {
    /// Exactly the server's current page, never a union of pages
    pub tasks: Vec<Task>,
    /// 1-based page number
    pub page: u32,
    pub filter: Filter,
    /// Text of the new-task input
    pub draft: String,
    pub loading: bool,
    pub submitting: bool,
    /// Ids with a delete request in flight
    pub removing: Vec<i64>,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            page: 1,
            filter: Filter::All,
            draft: String::new(),
            loading: false,
            submitting: false,
            removing: Vec::new(),
        }
    }
}

/// Raises a busy flag and lowers it again on drop, whatever the exit path
struct BusyFlag<F: Fn(bool)> {
    set: F,
}

impl<F: Fn(bool)> BusyFlag<F> {
    fn raise(set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: Fn(bool)> Drop for BusyFlag<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}

/// Offset/limit window for a 1-based page
pub fn page_window(page: u32, page_size: u32) -> (u32, u32) {
    (page.max(1).saturating_sub(1).saturating_mul(page_size), page_size)
}

#[derive(Clone)]
pub struct TaskListController {
    api: SharedTaskApi,
    session: Session,
    notifications: Notifications,
    state: Store<TaskListState>,
    page_size: u32,
}

impl TaskListController {
    pub fn new(api: SharedTaskApi, session: Session, notifications: Notifications, page_size: u32) -> Self {
        Self {
            api,
            session,
            notifications,
            state: Store::new(TaskListState::default()),
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> Store<TaskListState> {
        self.state
    }

    pub fn page(&self) -> u32 {
        self.state.page().get_untracked()
    }

    fn fail(&self, action: TaskAction, err: &ApiError) {
        warn!("{}: {}", action.failure_message(), err);
        self.notifications.error(action.failure_message());
    }

    /// Initial load on entering the page; does nothing without a credential
    pub async fn mount(&self) -> bool {
        if !self.session.is_authenticated() {
            info!("No session, skipping task load");
            return false;
        }
        self.load(self.page()).await;
        true
    }

    pub async fn load(&self, page: u32) {
        let state = self.state;
        let _busy = BusyFlag::raise(move |v| state.loading().set(v));

        let (skip, limit) = page_window(page, self.page_size);
        debug!(page, skip, limit, "loading tasks");
        match self.api.list_tasks(skip, limit).await {
            Ok(tasks) => {
                debug!("loaded {} tasks", tasks.len());
                state.tasks().set(tasks);
            }
            Err(err) => {
                state.tasks().set(Vec::new());
                self.fail(TaskAction::Load, &err);
            }
        }
    }

    pub async fn reload(&self) {
        self.load(self.page()).await;
    }

    /// Switch to `page` and load it
    pub async fn set_page(&self, page: u32) {
        let page = page.max(1);
        info!(page, "changing page");
        self.state.page().set(page);
        self.load(page).await;
    }

    pub async fn next_page(&self) {
        self.set_page(self.page() + 1).await;
    }

    pub async fn previous_page(&self) {
        self.set_page(self.page().saturating_sub(1)).await;
    }

    pub async fn add(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        let state = self.state;
        if state.submitting().get_untracked() {
            debug!("add ignored, already submitting");
            return;
        }
        let _busy = BusyFlag::raise(move |v| state.submitting().set(v));

        match self.api.create_task(title).await {
            Ok(task) => {
                info!(id = task.id, "task created");
                state.draft().set(String::new());
                self.reload().await;
            }
            Err(err) => self.fail(TaskAction::Add, &err),
        }
    }

    /// Add whatever is in the draft input
    pub async fn add_draft(&self) {
        let draft = self.state.draft().get_untracked();
        self.add(&draft).await;
    }

    pub async fn toggle(&self, id: i64, completed: bool) {
        match self.api.update_task(id, completed).await {
            Ok(_) => self.reload().await,
            Err(err) => self.fail(TaskAction::Update, &err),
        }
    }

    pub async fn remove(&self, id: i64) {
        let state = self.state;
        if self.is_removing_untracked(id) {
            debug!(id, "remove ignored, already in flight");
            return;
        }
        let _busy = BusyFlag::raise(move |on| {
            state.removing().update(|ids| {
                if on {
                    ids.push(id);
                } else {
                    ids.retain(|other| *other != id);
                }
            })
        });

        match self.api.delete_task(id).await {
            Ok(()) => {
                info!(id, "task deleted");
                let page = self.page();
                let last_on_page = self.state.tasks().with_untracked(|tasks| tasks.len() == 1);
                if last_on_page && page > 1 {
                    self.set_page(page - 1).await;
                } else {
                    self.load(page).await;
                }
            }
            Err(err) => self.fail(TaskAction::Delete, &err),
        }
    }

    fn is_removing_untracked(&self, id: i64) -> bool {
        self.state.removing().with_untracked(|ids| ids.contains(&id))
    }

    // ========================
    // Derived View State
    // ========================

    pub fn is_removing(&self, id: i64) -> bool {
        self.state.removing().with(|ids| ids.contains(&id))
    }

    /// Current page narrowed by the filter; never touches the page itself
    pub fn filtered_view(&self) -> Vec<Task> {
        let filter = self.state.filter().get();
        self.state.tasks().with(|tasks| {
            tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
        })
    }

    pub fn empty_message(&self) -> &'static str {
        self.state.filter().get().empty_message()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.page().get() > 1 && !self.state.loading().get()
    }

    /// A short page means there is nothing after it
    pub fn can_go_forward(&self) -> bool {
        let full_page = self.state.tasks().with(|tasks| tasks.len() >= self.page_size as usize);
        full_page && !self.state.loading().get()
    }

    pub fn set_filter(&self, filter: Filter) {
        self.state.filter().set(filter);
    }

    pub fn set_draft(&self, draft: String) {
        self.state.draft().set(draft);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use futures::executor::block_on;
    use leptos::prelude::Owner;

    use super::*;
    use crate::api::TaskApi;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List { skip: u32, limit: u32 },
        Create(String),
        Update(i64, bool),
        Delete(i64),
    }

    /// In-memory backend holding every task, paged like the real server
    #[derive(Default)]
    struct FakeTaskApi {
        tasks: Mutex<Vec<Task>>,
        calls: Mutex<Vec<Call>>,
        failures: Mutex<VecDeque<ApiError>>,
    }

    impl FakeTaskApi {
        fn with_tasks(count: usize) -> Arc<Self> {
            let api = Self::default();
            *api.tasks.lock().unwrap() = (1..=count as i64).map(|id| make_task(id, id % 2 == 0)).collect();
            Arc::new(api)
        }

        fn fail_next(&self, err: ApiError) {
            self.failures.lock().unwrap().push_back(err);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls().iter().filter(|c| matches!(c, Call::List { .. })).count()
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            match self.failures.lock().unwrap().pop_front() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TaskApi for FakeTaskApi {
        async fn list_tasks(&self, skip: u32, limit: u32) -> Result<Vec<Task>, ApiError> {
            self.record(Call::List { skip, limit })?;
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks.iter().skip(skip as usize).take(limit as usize).cloned().collect())
        }

        async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
            self.record(Call::Create(title.to_string()))?;
            let mut tasks = self.tasks.lock().unwrap();
            let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            let task = Task { title: title.to_string(), ..make_task(id, false) };
            tasks.push(task.clone());
            Ok(task)
        }

        async fn update_task(&self, id: i64, completed: bool) -> Result<Task, ApiError> {
            self.record(Call::Update(id, completed))?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ApiError::Status { status: 404, detail: None })?;
            task.completed = completed;
            Ok(task.clone())
        }

        async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
            self.record(Call::Delete(id))?;
            self.tasks.lock().unwrap().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn make_task(id: i64, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            completed,
            created_at: "2024-03-01T09:30:00".to_string(),
        }
    }

    struct Harness {
        _owner: Owner,
        api: Arc<FakeTaskApi>,
        session: Session,
        notifications: Notifications,
        controller: TaskListController,
    }

    fn harness(api: Arc<FakeTaskApi>) -> Harness {
        let owner = Owner::new();
        owner.set();
        let session = Session::in_memory();
        session.set("token");
        let notifications = Notifications::new();
        let controller = TaskListController::new(api.clone(), session.clone(), notifications, 5);
        Harness { _owner: owner, api, session, notifications, controller }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 5), (0, 5));
        assert_eq!(page_window(2, 5), (5, 5));
        assert_eq!(page_window(7, 3), (18, 3));
        assert_eq!(page_window(0, 5), (0, 5));
    }

    #[test]
    fn test_load_requests_offset_and_limit() {
        let h = harness(FakeTaskApi::with_tasks(12));
        for page in 1..=4u32 {
            block_on(h.controller.load(page));
        }
        let expected: Vec<Call> = (0..4u32).map(|i| Call::List { skip: i * 5, limit: 5 }).collect();
        assert_eq!(h.api.calls(), expected);

        block_on(h.controller.load(2));
        let state = h.controller.state();
        assert_eq!(ids(&state.tasks().get_untracked()), vec![6, 7, 8, 9, 10]);
        assert!(!state.loading().get_untracked());
    }

    #[test]
    fn test_load_replaces_instead_of_appending() {
        let h = harness(FakeTaskApi::with_tasks(8));
        block_on(h.controller.set_page(1));
        block_on(h.controller.set_page(2));
        assert_eq!(ids(&h.controller.state().tasks().get_untracked()), vec![6, 7, 8]);
        assert_eq!(h.controller.page(), 2);
    }

    #[test]
    fn test_load_failure_clears_tasks_and_notifies() {
        let h = harness(FakeTaskApi::with_tasks(3));
        block_on(h.controller.load(1));
        assert_eq!(h.controller.state().tasks().get_untracked().len(), 3);

        h.api.fail_next(ApiError::Status { status: 500, detail: None });
        block_on(h.controller.load(1));

        let state = h.controller.state();
        assert!(state.tasks().get_untracked().is_empty());
        assert!(!state.loading().get_untracked());
        let notes = h.notifications.snapshot();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "Failed to load tasks");
    }

    #[test]
    fn test_blank_titles_are_ignored() {
        let h = harness(FakeTaskApi::with_tasks(2));
        block_on(h.controller.load(1));
        let before = h.controller.state().tasks().get_untracked();
        let calls_before = h.api.calls().len();

        block_on(h.controller.add(""));
        block_on(h.controller.add("   "));

        assert_eq!(h.api.calls().len(), calls_before);
        assert_eq!(h.controller.state().tasks().get_untracked(), before);
    }

    #[test]
    fn test_add_trims_clears_draft_and_reloads() {
        let h = harness(FakeTaskApi::with_tasks(1));
        h.controller.set_draft("  Water plants ".to_string());

        block_on(h.controller.add_draft());

        assert_eq!(
            h.api.calls(),
            vec![Call::Create("Water plants".into()), Call::List { skip: 0, limit: 5 }]
        );
        let state = h.controller.state();
        assert_eq!(state.draft().get_untracked(), "");
        assert!(!state.submitting().get_untracked());
        assert_eq!(state.tasks().get_untracked()[1].title, "Water plants");
    }

    #[test]
    fn test_add_failure_keeps_draft() {
        let h = harness(FakeTaskApi::with_tasks(1));
        h.controller.set_draft("Call mom".to_string());
        h.api.fail_next(ApiError::network("offline"));

        block_on(h.controller.add_draft());

        let state = h.controller.state();
        assert_eq!(state.draft().get_untracked(), "Call mom");
        assert!(!state.submitting().get_untracked());
        assert_eq!(h.api.list_calls(), 0);
        assert_eq!(h.notifications.snapshot()[0].message, "Failed to add task");
    }

    #[test]
    fn test_add_refused_while_submitting() {
        let h = harness(FakeTaskApi::with_tasks(0));
        h.controller.state().submitting().set(true);
        block_on(h.controller.add("Twice"));
        assert!(h.api.calls().is_empty());
    }

    #[test]
    fn test_toggle_refetches_instead_of_mutating() {
        let h = harness(FakeTaskApi::with_tasks(3));
        block_on(h.controller.load(1));
        let loads_before = h.api.list_calls();

        block_on(h.controller.toggle(1, true));

        assert_eq!(h.api.list_calls(), loads_before + 1);
        assert!(h.controller.state().tasks().get_untracked()[0].completed);
    }

    #[test]
    fn test_toggle_failure_leaves_task_unchanged() {
        let h = harness(FakeTaskApi::with_tasks(3));
        block_on(h.controller.load(1));
        let loads_before = h.api.list_calls();
        h.api.fail_next(ApiError::Status { status: 500, detail: None });

        block_on(h.controller.toggle(1, true));

        assert_eq!(h.api.list_calls(), loads_before);
        assert!(!h.controller.state().tasks().get_untracked()[0].completed);
        assert_eq!(h.notifications.snapshot()[0].message, "Failed to update task");
    }

    #[test]
    fn test_remove_last_item_steps_back_a_page() {
        let h = harness(FakeTaskApi::with_tasks(6));
        block_on(h.controller.set_page(2));
        assert_eq!(ids(&h.controller.state().tasks().get_untracked()), vec![6]);
        let calls_before = h.api.calls().len();

        block_on(h.controller.remove(6));

        assert_eq!(h.controller.page(), 1);
        let after: Vec<Call> = h.api.calls().split_off(calls_before);
        assert_eq!(after, vec![Call::Delete(6), Call::List { skip: 0, limit: 5 }]);
        assert_eq!(h.controller.state().tasks().get_untracked().len(), 5);
        assert!(!h.controller.is_removing(6));
    }

    #[test]
    fn test_remove_refused_while_same_task_in_flight() {
        let h = harness(FakeTaskApi::with_tasks(3));
        block_on(h.controller.load(1));
        let calls_before = h.api.calls().len();

        h.controller.state().removing().set(vec![2]);
        assert!(h.controller.is_removing(2));
        block_on(h.controller.remove(2));
        assert_eq!(h.api.calls().len(), calls_before);

        block_on(h.controller.remove(3));
        let after: Vec<Call> = h.api.calls().split_off(calls_before);
        assert_eq!(after, vec![Call::Delete(3), Call::List { skip: 0, limit: 5 }]);
        assert_eq!(h.controller.state().removing().get_untracked(), vec![2]);
    }

    #[test]
    fn test_remove_with_siblings_reloads_same_page() {
        let h = harness(FakeTaskApi::with_tasks(8));
        block_on(h.controller.set_page(2));
        let calls_before = h.api.calls().len();

        block_on(h.controller.remove(7));

        assert_eq!(h.controller.page(), 2);
        let after: Vec<Call> = h.api.calls().split_off(calls_before);
        assert_eq!(after, vec![Call::Delete(7), Call::List { skip: 5, limit: 5 }]);
        assert_eq!(ids(&h.controller.state().tasks().get_untracked()), vec![6, 8]);
    }

    #[test]
    fn test_remove_only_item_on_first_page_stays() {
        let h = harness(FakeTaskApi::with_tasks(1));
        block_on(h.controller.load(1));
        block_on(h.controller.remove(1));
        assert_eq!(h.controller.page(), 1);
        assert!(h.controller.state().tasks().get_untracked().is_empty());
    }

    #[test]
    fn test_remove_failure_changes_nothing() {
        let h = harness(FakeTaskApi::with_tasks(6));
        block_on(h.controller.set_page(2));
        let calls_before = h.api.calls().len();
        h.api.fail_next(ApiError::network("offline"));

        block_on(h.controller.remove(6));

        assert_eq!(h.controller.page(), 2);
        assert_eq!(h.api.calls().len(), calls_before + 1);
        assert_eq!(ids(&h.controller.state().tasks().get_untracked()), vec![6]);
        assert_eq!(h.notifications.snapshot()[0].message, "Failed to delete task");
        assert!(!h.controller.is_removing(6));
    }

    #[test]
    fn test_filtered_view_is_pure() {
        let h = harness(FakeTaskApi::with_tasks(5));
        block_on(h.controller.load(1));
        let all = h.controller.state().tasks().get_untracked();

        h.controller.set_filter(Filter::Active);
        let first = h.controller.filtered_view();
        let second = h.controller.filtered_view();
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![1, 3, 5]);
        assert!(first.iter().all(|t| !t.completed));

        h.controller.set_filter(Filter::Completed);
        assert_eq!(ids(&h.controller.filtered_view()), vec![2, 4]);

        h.controller.set_filter(Filter::All);
        assert_eq!(h.controller.filtered_view(), all);
        assert_eq!(h.controller.state().tasks().get_untracked(), all);
    }

    #[test]
    fn test_empty_message_follows_filter() {
        let h = harness(FakeTaskApi::with_tasks(0));
        assert_eq!(h.controller.empty_message(), "No tasks yet. Add something!");
        h.controller.set_filter(Filter::Completed);
        assert_eq!(h.controller.empty_message(), "No completed tasks");
    }

    #[test]
    fn test_forward_enabled_only_on_full_page() {
        let h = harness(FakeTaskApi::with_tasks(5));
        block_on(h.controller.load(1));
        assert!(h.controller.can_go_forward());
        assert!(!h.controller.can_go_back());

        let h = harness(FakeTaskApi::with_tasks(3));
        block_on(h.controller.load(1));
        assert!(!h.controller.can_go_forward());
    }

    #[test]
    fn test_navigation_disabled_while_loading() {
        let h = harness(FakeTaskApi::with_tasks(10));
        block_on(h.controller.set_page(2));
        assert!(h.controller.can_go_back());
        assert!(h.controller.can_go_forward());

        h.controller.state().loading().set(true);
        assert!(!h.controller.can_go_back());
        assert!(!h.controller.can_go_forward());
    }

    #[test]
    fn test_previous_page_never_goes_below_one() {
        let h = harness(FakeTaskApi::with_tasks(2));
        block_on(h.controller.previous_page());
        assert_eq!(h.controller.page(), 1);
        assert_eq!(h.api.calls(), vec![Call::List { skip: 0, limit: 5 }]);
    }

    #[test]
    fn test_mount_without_credential_skips_request() {
        let h = harness(FakeTaskApi::with_tasks(3));
        h.session.clear();

        assert!(!block_on(h.controller.mount()));
        assert!(h.api.calls().is_empty());

        h.session.set("again");
        assert!(block_on(h.controller.mount()));
        assert_eq!(h.api.calls(), vec![Call::List { skip: 0, limit: 5 }]);
    }
}
