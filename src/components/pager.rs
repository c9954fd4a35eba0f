//! Pager Component
//!
//! Back / page number / Forward. There is no total count, so Forward is
//! only offered after a full page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{TaskListController, TaskListStateStoreFields};

#[component]
pub fn Pager() -> impl IntoView {
    let controller = StoredValue::new(expect_context::<TaskListController>());
    let state = controller.get_value().state();

    let back = move |_| {
        let controller = controller.get_value();
        spawn_local(async move { controller.previous_page().await });
    };
    let forward = move |_| {
        let controller = controller.get_value();
        spawn_local(async move { controller.next_page().await });
    };

    view! {
        <div class="pager">
            <button
                class="pager-btn"
                disabled=move || !controller.get_value().can_go_back()
                on:click=back
            >
                "Back"
            </button>
            <span class="pager-label">{move || format!("Page {}", state.page().get())}</span>
            <button
                class="pager-btn"
                disabled=move || !controller.get_value().can_go_forward()
                on:click=forward
            >
                "Forward"
            </button>
        </div>
    }
}
