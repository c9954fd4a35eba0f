//! UI Components
//!
//! Leptos views for the auth pages and the task list.

mod auth_form;
mod filter_bar;
mod new_task_form;
mod pager;
mod task_page;
mod task_row;
mod toast_stack;

pub use auth_form::{AuthPage, NotFound};
pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use pager::Pager;
pub use task_page::TasksPage;
pub use task_row::TaskRow;
pub use toast_stack::ToastStack;
