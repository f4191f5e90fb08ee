//! In-Flight Call Tracking
//!
//! At most one outstanding remote call per task: controls stay disabled
//! while an entry is registered, and every call carries a token so a
//! superseded completion is dropped instead of applied out of order.

use std::collections::HashMap;

use crate::models::TaskId;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingOps {
    next_token: u64,
    inflight: HashMap<TaskId, u64>,
}

impl PendingOps {
    /// Register a call for this task, superseding any previous entry.
    /// Returns the completion token for the new call.
    pub fn begin(&mut self, id: TaskId) -> u64 {
        self.next_token += 1;
        self.inflight.insert(id, self.next_token);
        self.next_token
    }

    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.inflight.contains_key(id)
    }

    /// Deregister a completed call. Returns false when the token is no
    /// longer current; the caller must discard that completion.
    pub fn finish(&mut self, id: &TaskId, token: u64) -> bool {
        match self.inflight.get(id) {
            Some(current) if *current == token => {
                self.inflight.remove(id);
                true
            }
            _ => false,
        }
    }
}
