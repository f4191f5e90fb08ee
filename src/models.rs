//! Task Models
//!
//! Data structures for the local collection and the remote wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Client-minted task identifier.
///
/// Minted for every task, whether fetched or created locally; the remote
/// service's numeric id travels separately as an opaque reference, so
/// nothing ever branches on id shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(raw: &str) -> Self {
        TaskId(raw.to_string())
    }
}

/// Mint a fresh 9-character base-36 identifier.
pub fn mint_task_id() -> TaskId {
    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        let slot = (random_unit() * ID_ALPHABET.len() as f64) as usize % ID_ALPHABET.len();
        id.push(ID_ALPHABET[slot] as char);
    }
    TaskId(id)
}

#[cfg(target_arch = "wasm32")]
fn random_unit() -> f64 {
    js_sys::Math::random()
}

// Native builds only exist for the test suite; a per-instance hasher seed
// is random enough there.
#[cfg(not(target_arch = "wasm32"))]
fn random_unit() -> f64 {
    use std::hash::{BuildHasher, Hasher};
    let hasher = std::collections::hash_map::RandomState::new().build_hasher();
    hasher.finish() as f64 / u64::MAX as f64
}

/// Task record held in the session's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Remote service's numeric id; used only to address REST paths.
    pub remote_id: Option<u64>,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn from_remote(id: TaskId, remote: RemoteTask) -> Self {
        Self {
            id,
            remote_id: Some(remote.id),
            title: remote.title,
            completed: remote.completed,
        }
    }
}

/// Wire record of the remote task service. Fields we don't use (like
/// `userId`) are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTask {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Working value behind the add form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
}

impl TaskDraft {
    /// Empty and whitespace-only titles are rejected before any remote
    /// call is made.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            Err("Task title cannot be empty!".to_string())
        } else {
            Ok(())
        }
    }

    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            remote_id: None,
            title: self.title.trim().to_string(),
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_id_shape() {
        let id = mint_task_id();
        assert_eq!(id.as_str().len(), 9);
        assert!(id
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn test_minted_ids_differ() {
        assert_ne!(mint_task_id(), mint_task_id());
    }

    #[test]
    fn test_draft_rejects_empty_title() {
        let draft = TaskDraft {
            title: String::new(),
            completed: false,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_rejects_whitespace_title() {
        let draft = TaskDraft {
            title: "   \t".to_string(),
            completed: true,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_accepts_real_title() {
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            completed: false,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_into_task_trims_title() {
        let draft = TaskDraft {
            title: "  Buy milk  ".to_string(),
            completed: false,
        };
        let task = draft.into_task(TaskId::from("abc123xyz"));
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.remote_id, None);
        assert!(!task.completed);
    }

    #[test]
    fn test_remote_task_ignores_unknown_fields() {
        let json = r#"{"userId":1,"id":3,"title":"fugiat veniam minus","completed":false}"#;
        let remote: RemoteTask = serde_json::from_str(json).expect("decode failed");
        assert_eq!(remote.id, 3);
        assert_eq!(remote.title, "fugiat veniam minus");
        assert!(!remote.completed);
    }

    #[test]
    fn test_from_remote_keeps_remote_reference() {
        let remote = RemoteTask {
            id: 42,
            title: "X".to_string(),
            completed: true,
        };
        let task = Task::from_remote(TaskId::from("abc123xyz"), remote);
        assert_eq!(task.remote_id, Some(42));
        assert_eq!(task.title, "X");
        assert!(task.completed);
    }
}
