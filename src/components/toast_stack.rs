//! Toast Stack Component
//!
//! Renders notifications top-right; each one closes itself after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::notify::NotifyLevel;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();
    let notifications = ctx.notifications;
    let timeout_ms = ctx.config.toast_timeout_ms;

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.list()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    spawn_local(async move {
                        TimeoutFuture::new(timeout_ms).await;
                        notifications.dismiss(id);
                    });
                    let class = match n.level {
                        NotifyLevel::Error => "toast toast-error",
                        NotifyLevel::Info => "toast toast-info",
                    };
                    view! {
                        <div class=class on:click=move |_| notifications.dismiss(id)>
                            <strong class="toast-title">{n.title}</strong>
                            <p class="toast-message">{n.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
