//! Notifications
//!
//! Transient toast queue shared through context.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: String,
    pub level: NotifyLevel,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u32>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    fn push(&self, title: &'static str, message: String, level: NotifyLevel) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, title, message, level }));
        id
    }

    /// Show an error toast, returns its id
    pub fn error(&self, message: impl Into<String>) -> u32 {
        self.push("Error", message.into(), NotifyLevel::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> u32 {
        self.push("Info", message.into(), NotifyLevel::Info)
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    /// Reactive read for views
    pub fn list(&self) -> Vec<Notification> {
        self.items.get()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.get_untracked()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
