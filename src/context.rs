//! Application Context
//!
//! Transient UI state shared via the Leptos Context API: the editing
//! buffer and the last surfaced remote failure.

use leptos::prelude::*;

use crate::edit::EditBuffer;
use crate::models::Task;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Editing buffer - read
    pub editing: ReadSignal<EditBuffer>,
    /// Editing buffer - write
    set_editing: WriteSignal<EditBuffer>,
    /// Last remote failure shown to the user - read
    pub last_error: ReadSignal<Option<String>>,
    set_last_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        editing: (ReadSignal<EditBuffer>, WriteSignal<EditBuffer>),
        last_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            editing: editing.0,
            set_editing: editing.1,
            last_error: last_error.0,
            set_last_error: last_error.1,
        }
    }

    /// Copy a record into the editing buffer, overwriting any previous one.
    pub fn begin_edit(&self, task: Task) {
        self.set_editing.update(|buffer| buffer.begin(task));
    }

    pub fn edit_title(&self, title: String) {
        self.set_editing.update(|buffer| buffer.set_title(title));
    }

    pub fn edit_completed(&self, completed: bool) {
        self.set_editing.update(|buffer| buffer.set_completed(completed));
    }

    /// Drain the buffer for commit.
    pub fn take_edit(&self) -> Option<Task> {
        let mut taken = None;
        self.set_editing.update(|buffer| taken = buffer.take());
        taken
    }

    /// Discard the buffer without any remote call.
    pub fn cancel_edit(&self) {
        self.set_editing.update(|buffer| {
            buffer.take();
        });
    }

    pub fn report_error(&self, message: impl Into<String>) {
        self.set_last_error.set(Some(message.into()));
    }

    pub fn clear_error(&self) {
        self.set_last_error.set(None);
    }
}
