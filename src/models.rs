//! Frontend Models
//!
//! Data structures matching the task API wire format.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    #[serde(alias = "createdAt", default)]
    pub created_at: String,
}

impl Task {
    /// Creation time as `DD.MM.YYYY HH:MM`, or the raw value if it is not ISO-8601
    pub fn created_label(&self) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
        self.created_at.clone()
    }
}

/// Client-side view filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Shown when the filtered page is empty
    pub fn empty_message(self) -> &'static str {
        match self {
            Filter::All => "No tasks yet. Add something!",
            Filter::Active => "No active tasks",
            Filter::Completed => "No completed tasks",
        }
    }
}

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TaskPatch {
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body; `detail` is only used when it is a plain string
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
