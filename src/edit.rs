//! Editing Buffer
//!
//! Transient holding area for a task's in-progress edits, distinct from
//! the committed collection. Two states: idle and editing. `begin` copies
//! the selected record in (overwriting any previous buffer; there is no
//! nested editing), field setters mutate the buffer only, and `take`
//! drains it for either commit or cancel.

use crate::models::Task;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditBuffer {
    buffer: Option<Task>,
}

impl EditBuffer {
    /// idle -> editing; while already editing, overwrites the buffer.
    pub fn begin(&mut self, task: Task) {
        self.buffer = Some(task);
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn task(&self) -> Option<&Task> {
        self.buffer.as_ref()
    }

    pub fn set_title(&mut self, title: String) {
        if let Some(task) = self.buffer.as_mut() {
            task.title = title;
        }
    }

    pub fn set_completed(&mut self, completed: bool) {
        if let Some(task) = self.buffer.as_mut() {
            task.completed = completed;
        }
    }

    /// editing -> idle, yielding the buffered record. Commit feeds it to
    /// reconciliation; cancel simply drops it.
    pub fn take(&mut self) -> Option<Task> {
        self.buffer.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: TaskId::from(id),
            remote_id: Some(1),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_begin_copies_record_into_buffer() {
        let mut buffer = EditBuffer::default();
        assert!(!buffer.is_editing());
        buffer.begin(task("1", "A", false));
        assert!(buffer.is_editing());
        assert_eq!(buffer.task().unwrap().title, "A");
    }

    #[test]
    fn test_mutations_touch_only_the_buffer() {
        let original = task("1", "A", false);
        let mut buffer = EditBuffer::default();
        buffer.begin(original.clone());
        buffer.set_title("A edited".to_string());
        buffer.set_completed(true);
        // The record the buffer was seeded from is unaffected.
        assert_eq!(original.title, "A");
        assert!(!original.completed);
        assert_eq!(buffer.task().unwrap().title, "A edited");
        assert!(buffer.task().unwrap().completed);
    }

    #[test]
    fn test_take_yields_final_value_and_returns_to_idle() {
        let mut buffer = EditBuffer::default();
        buffer.begin(task("1", "A", false));
        buffer.set_title("B".to_string());
        let committed = buffer.take().expect("buffer should hold a record");
        assert_eq!(committed.title, "B");
        assert!(!buffer.is_editing());
        assert!(buffer.take().is_none());
    }

    #[test]
    fn test_begin_while_editing_overwrites_buffer() {
        let mut buffer = EditBuffer::default();
        buffer.begin(task("1", "A", false));
        buffer.set_title("half-finished".to_string());
        buffer.begin(task("2", "B", true));
        let current = buffer.task().unwrap();
        assert_eq!(current.id, TaskId::from("2"));
        assert_eq!(current.title, "B");
    }

    #[test]
    fn test_setters_are_noops_while_idle() {
        let mut buffer = EditBuffer::default();
        buffer.set_title("ghost".to_string());
        buffer.set_completed(true);
        assert!(!buffer.is_editing());
    }
}
