//! Task State Store
//!
//! Uses Leptos reactive_stores for the session's task collection and the
//! in-flight call table. Every mutation goes through a pure transition
//! that produces a new collection value; the reactive layer swaps it in
//! wholesale, which is what drives re-rendering.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::pending::PendingOps;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Ordered task collection, authoritative for the page session
    pub tasks: Vec<Task>,
    /// In-flight remote calls keyed by task id
    pub pending: PendingOps,
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Pure Transitions
// ========================

/// Append a record to the end of the sequence.
pub fn with_inserted(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

/// Flip `completed` on the matching record; unknown ids are a no-op and
/// every other record is untouched.
pub fn with_toggled(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if task.id == *id {
                task.completed = !task.completed;
            }
            task
        })
        .collect()
}

/// Substitute the record sharing the replacement's id.
pub fn with_replaced(tasks: &[Task], replacement: Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == replacement.id {
                replacement.clone()
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Remove the first matching record, reporting it and its index so a
/// failed delete can restore it in place.
pub fn with_removed(tasks: &[Task], id: &TaskId) -> (Vec<Task>, Option<(usize, Task)>) {
    match tasks.iter().position(|task| task.id == *id) {
        Some(index) => {
            let mut next = tasks.to_vec();
            let removed = next.remove(index);
            (next, Some((index, removed)))
        }
        None => (tasks.to_vec(), None),
    }
}

/// Re-insert a record at its original index (delete rollback).
pub fn with_restored(tasks: &[Task], index: usize, task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.insert(index.min(next.len()), task);
    next
}

/// Attach the acknowledged remote reference to a created record.
pub fn with_remote_ref(tasks: &[Task], id: &TaskId, remote_id: u64) -> Vec<Task> {
    tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if task.id == *id {
                task.remote_id = Some(remote_id);
            }
            task
        })
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection with freshly fetched records. Load is
/// always a full replace, never an append.
pub fn store_load_tasks(store: &TaskStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Swap in the next collection value.
pub fn store_apply(store: &TaskStore, next: Vec<Task>) {
    *store.tasks().write() = next;
}

/// Untracked snapshot for use inside intent handlers.
pub fn store_snapshot(store: &TaskStore) -> Vec<Task> {
    store.tasks().get_untracked()
}

/// Register an in-flight call for a task, returning its completion token.
pub fn store_begin_op(store: &TaskStore, id: TaskId) -> u64 {
    store.pending().write().begin(id)
}

/// Deregister an in-flight call. A false return means a newer call
/// superseded this one and its completion must be discarded.
pub fn store_finish_op(store: &TaskStore, id: &TaskId, token: u64) -> bool {
    store.pending().write().finish(id, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: TaskId::from(id),
            remote_id: None,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_insert_appends_exactly_one_record() {
        let tasks = Vec::new();
        let next = with_inserted(&tasks, task("abc123xyz", "Buy milk", false));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].title, "Buy milk");
        assert!(!next[0].completed);
    }

    #[test]
    fn test_toggle_flips_only_the_matching_record() {
        let tasks = vec![task("1", "A", false), task("2", "B", false)];
        let next = with_toggled(&tasks, &TaskId::from("1"));
        assert!(next[0].completed);
        assert_eq!(next[1], tasks[1]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let tasks = vec![task("1", "A", false)];
        let next = with_toggled(&tasks, &TaskId::from("missing"));
        assert_eq!(next, tasks);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let tasks = vec![task("1", "A", false)];
        let id = TaskId::from("1");
        let next = with_toggled(&with_toggled(&tasks, &id), &id);
        assert_eq!(next, tasks);
    }

    #[test]
    fn test_replace_substitutes_matching_record() {
        let tasks = vec![task("1", "A", false), task("2", "B", false)];
        let next = with_replaced(&tasks, task("2", "B edited", true));
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[1].title, "B edited");
        assert!(next[1].completed);
    }

    #[test]
    fn test_remove_deletes_first_match_and_keeps_order() {
        let tasks = vec![task("1", "A", false), task("2", "X", false), task("3", "C", true)];
        let (next, removed) = with_removed(&tasks, &TaskId::from("2"));
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].title, "A");
        assert_eq!(next[1].title, "C");
        let (index, record) = removed.expect("record should be reported");
        assert_eq!(index, 1);
        assert_eq!(record.title, "X");
    }

    #[test]
    fn test_remove_unknown_id_reports_nothing() {
        let tasks = vec![task("1", "A", false)];
        let (next, removed) = with_removed(&tasks, &TaskId::from("missing"));
        assert_eq!(next, tasks);
        assert!(removed.is_none());
    }

    #[test]
    fn test_remove_then_restore_round_trips() {
        let tasks = vec![task("1", "A", false), task("2", "B", true), task("3", "C", false)];
        let (next, removed) = with_removed(&tasks, &TaskId::from("2"));
        let (index, record) = removed.unwrap();
        assert_eq!(with_restored(&next, index, record), tasks);
    }

    #[test]
    fn test_restore_index_is_clamped() {
        let tasks = vec![task("1", "A", false)];
        let next = with_restored(&tasks, 10, task("2", "B", false));
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].title, "B");
    }

    #[test]
    fn test_remote_ref_attaches_to_matching_record() {
        let tasks = vec![task("1", "A", false), task("2", "B", false)];
        let next = with_remote_ref(&tasks, &TaskId::from("2"), 201);
        assert_eq!(next[0].remote_id, None);
        assert_eq!(next[1].remote_id, Some(201));
    }

    #[test]
    fn test_remove_single_record_empties_collection() {
        let tasks = vec![task("2", "X", false)];
        let (next, _) = with_removed(&tasks, &TaskId::from("2"));
        assert!(next.is_empty());
    }
}
