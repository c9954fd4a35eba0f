//! Task Row Component
//!
//! One task: completion checkbox, title, creation date, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::TaskListController;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let controller = StoredValue::new(expect_context::<TaskListController>());
    let id = task.id;
    let completed = task.completed;

    // The checkbox only changes once the reload brings the new state
    let toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            controller.toggle(id, !completed).await;
        });
    };

    let delete = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.remove(id).await;
        });
    };
    let removing = move || controller.with_value(|c| c.is_removing(id));

    let row_class = if completed { "task-row completed" } else { "task-row" };

    view! {
        <li class=row_class>
            <label class="task-label">
                <input type="checkbox" prop:checked=completed on:click=toggle />
                <span class="task-title">{task.title.clone()}</span>
            </label>
            <span class="task-created">{task.created_label()}</span>
            <button class="delete-btn" title="Delete task" disabled=removing on:click=delete>
                "×"
            </button>
        </li>
    }
}
