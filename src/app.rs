//! To-Do Frontend App
//!
//! Router, route guard and toast stack around the three views.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::auth::AuthMode;
use crate::components::{AuthPage, NotFound, TasksPage, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::guard::{RouteGuard, View};
use crate::session::Session;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config, Session::browser()));

    view! {
        <Router>
            <RouteGuard />
            <ToastStack />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=View::Tasks.path() /> } />
                <Route path=path!("/sign-in") view=|| view! { <AuthPage mode=AuthMode::SignIn /> } />
                <Route path=path!("/sign-up") view=|| view! { <AuthPage mode=AuthMode::SignUp /> } />
                <Route path=path!("/tasks") view=TasksPage />
            </Routes>
        </Router>
    }
}
