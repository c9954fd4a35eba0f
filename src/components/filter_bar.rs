//! Filter Bar Component
//!
//! Segmented control for the client-side task filter.

use leptos::prelude::*;

use crate::controller::{TaskListController, TaskListStateStoreFields};
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let controller = StoredValue::new(expect_context::<TaskListController>());
    let state = controller.get_value().state();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || state.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| controller.get_value().set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
