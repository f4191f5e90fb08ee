//! UI Components
//!
//! Leptos components for the task manager shell.

mod add_task_form;
mod delete_confirm_button;
mod error_banner;
mod task_editor;
mod task_item;
mod task_list;

pub use add_task_form::AddTaskForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use task_editor::TaskEditor;
pub use task_item::TaskItem;
pub use task_list::TaskList;
