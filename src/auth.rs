//! Sign-in / Sign-up Flows
//!
//! Call the auth endpoints, store the returned token, and turn failures into
//! notifications. Views only decide where to navigate afterwards.

use tracing::{info, warn};

use crate::api::AuthApi;
use crate::error::{sign_in_failure_message, EMAIL_TAKEN};
use crate::notify::Notifications;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::SignUp => "Sign up",
        }
    }
}

/// Authenticate and store the token; true when the user is now signed in
pub async fn authenticate(
    api: &dyn AuthApi,
    session: &Session,
    notifications: Notifications,
    mode: AuthMode,
    email: &str,
    password: &str,
) -> bool {
    let result = match mode {
        AuthMode::SignIn => api.sign_in(email, password).await,
        AuthMode::SignUp => api.sign_up(email, password).await,
    };

    match result {
        Ok(token) => {
            session.set(&token.access_token);
            info!("{} succeeded", mode.title());
            true
        }
        Err(err) => {
            warn!("{} failed: {}", mode.title(), err);
            let message = match mode {
                AuthMode::SignIn => sign_in_failure_message(&err),
                AuthMode::SignUp => EMAIL_TAKEN.to_string(),
            };
            notifications.error(message);
            false
        }
    }
}

pub fn logout(session: &Session) {
    session.clear();
    info!("Signed out");
}
