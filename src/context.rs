//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{AuthApi, HttpApi, SharedTaskApi};
use crate::config::AppConfig;
use crate::notify::Notifications;
use crate::session::Session;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Credential store, shared with the API client
    pub session: Session,
    pub notifications: Notifications,
    api: Arc<HttpApi>,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Session) -> Self {
        let api = Arc::new(HttpApi::new(config.api_base_url.clone(), session.clone()));
        Self {
            config,
            session,
            notifications: Notifications::new(),
            api,
        }
    }

    pub fn task_api(&self) -> SharedTaskApi {
        self.api.clone()
    }

    pub fn auth_api(&self) -> &dyn AuthApi {
        self.api.as_ref()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
