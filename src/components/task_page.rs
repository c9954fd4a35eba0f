//! Tasks Page Component
//!
//! Header with logout, new-task form, filter, task list and pager.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth;
use crate::components::{FilterBar, NewTaskForm, Pager, TaskRow};
use crate::context::use_app_context;
use crate::controller::{TaskListController, TaskListStateStoreFields};
use crate::guard::View;

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let controller = TaskListController::new(
        ctx.task_api(),
        ctx.session.clone(),
        ctx.notifications,
        ctx.config.page_size,
    );
    provide_context(controller.clone());

    let state = controller.state();
    let navigate = StoredValue::new(use_navigate());

    // Initial load; without a session, go to sign-in and make no request
    {
        let controller = controller.clone();
        spawn_local(async move {
            if !controller.mount().await {
                navigate.with_value(|nav| nav(View::SignIn.path(), NavigateOptions::default()));
            }
        });
    }

    let session = ctx.session.clone();
    let notifications = ctx.notifications;
    let on_logout = move |_| {
        auth::logout(&session);
        notifications.info("Signed out");
        navigate.with_value(|nav| nav(View::SignIn.path(), NavigateOptions::default()));
    };

    let controller = StoredValue::new(controller);
    let visible = Memo::new(move |_| controller.get_value().filtered_view());

    view! {
        <main class="tasks-page">
            <header class="tasks-header">
                <h1>"To-Do List"</h1>
                <button class="logout-btn" on:click=on_logout>"Log out"</button>
            </header>

            <NewTaskForm />
            <FilterBar />

            <Show
                when=move || !state.loading().get()
                fallback=|| view! { <div class="loader">"Loading..."</div> }
            >
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=move || view! {
                        <p class="empty-state">{move || controller.get_value().empty_message()}</p>
                    }
                >
                    <ul class="task-list">
                        <For
                            each=move || visible.get()
                            key=|task| (task.id, task.completed, task.title.clone())
                            children=|task| view! { <TaskRow task=task /> }
                        />
                    </ul>
                </Show>
            </Show>

            <Pager />
        </main>
    }
}
