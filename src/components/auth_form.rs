//! Auth Page Component
//!
//! Email/password form shared by sign-in and sign-up.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth::{self, AuthMode};
use crate::context::use_app_context;
use crate::guard::View;

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let navigate = StoredValue::new(use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let ctx = ctx.get_value();

        loading.set(true);
        spawn_local(async move {
            let ok = auth::authenticate(
                ctx.auth_api(),
                &ctx.session,
                ctx.notifications,
                mode,
                &email_val,
                &password_val,
            )
            .await;
            loading.set(false);
            if ok {
                navigate.with_value(|nav| nav(View::Tasks.path(), NavigateOptions::default()));
            }
        });
    };

    let (prompt, other_label, other_view) = match mode {
        AuthMode::SignIn => ("No account?", "Sign up", View::SignUp),
        AuthMode::SignUp => ("Already registered?", "Sign in", View::SignIn),
    };

    view! {
        <main class="auth-page">
            <h1>{mode.title()}</h1>
            <form class="auth-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="your@email.com"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    placeholder="Your password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Please wait..." } else { mode.title() }}
                </button>
            </form>
            <p class="auth-switch">
                {prompt} " " <a href=other_view.path()>{other_label}</a>
            </p>
        </main>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"Page not found"</h1>
            <a href=View::Tasks.path()>"Go to tasks"</a>
        </main>
    }
}
