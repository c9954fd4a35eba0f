//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never got a response
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Server-provided detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Task list operations, used to name failures to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Load,
    Add,
    Update,
    Delete,
}

impl TaskAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load tasks",
            Self::Add => "Failed to add task",
            Self::Update => "Failed to update task",
            Self::Delete => "Failed to delete task",
        }
    }
}

pub const SIGN_IN_FAILED: &str = "Sign-in failed";
pub const EMAIL_TAKEN: &str = "This email is already taken";

/// Message shown for a failed sign-in: the server's detail when it sent one
pub fn sign_in_failure_message(err: &ApiError) -> String {
    err.detail().unwrap_or(SIGN_IN_FAILED).to_string()
}
