//! Route Guard
//!
//! Redirects on every navigation based on whether a credential is stored.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use tracing::debug;

use crate::context::use_app_context;

/// Application views and their paths
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    SignIn,
    SignUp,
    Tasks,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::SignIn => "/sign-in",
            View::SignUp => "/sign-up",
            View::Tasks => "/tasks",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        let path = path.trim_end_matches('/');
        [View::SignIn, View::SignUp, View::Tasks]
            .into_iter()
            .find(|view| view.path() == path)
    }

    pub fn is_protected(self) -> bool {
        matches!(self, View::Tasks)
    }

    pub fn is_auth_view(self) -> bool {
        matches!(self, View::SignIn | View::SignUp)
    }
}

/// Where to send the user, if anywhere
pub fn redirect_for(path: &str, authenticated: bool) -> Option<View> {
    let view = View::from_path(path)?;
    if view.is_protected() && !authenticated {
        Some(View::SignIn)
    } else if view.is_auth_view() && authenticated {
        Some(View::Tasks)
    } else {
        None
    }
}

/// Watches the location and applies [`redirect_for`]; renders nothing
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = use_app_context().session;
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let Some(target) = redirect_for(&path, session.is_authenticated()) {
            debug!("redirecting {} -> {}", path, target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..Default::default() });
        }
    });
}
