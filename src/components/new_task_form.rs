//! New Task Form Component
//!
//! Input + button for creating a task. Enter submits the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{TaskListController, TaskListStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let controller = StoredValue::new(expect_context::<TaskListController>());
    let state = controller.get_value().state();
    let submitting = move || state.submitting().get();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            controller.add_draft().await;
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="New task..."
                prop:value=move || state.draft().get()
                prop:disabled=submitting
                on:input=move |ev| controller.get_value().set_draft(event_target_value(&ev))
            />
            <button type="submit" disabled=submitting>
                {move || if submitting() { "Adding..." } else { "+ Add" }}
            </button>
        </form>
    }
}
