//! In-memory session store backed by `DashMap`.
//!
//! Entries are created lazily on first append and live for the lifetime of
//! the process. Reads clone the history out of the map so no `DashMap` guard
//! outlives the call.

use dashmap::DashMap;
use tracing::trace;

use nexus_types::chat::Turn;

use super::store::SessionStore;

/// Smallest history bound: one full user/assistant pair.
const MIN_HISTORY: usize = 2;

/// Default number of turns retained per user.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Process-wide history map with FIFO eviction per user.
///
/// `append_exchange` holds the shard write guard for the user's key while it
/// pushes both turns and truncates, which makes the pair insert atomic with
/// respect to other appends and reads of the same key.
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Vec<Turn>>,
    max_history: usize,
}

impl InMemorySessionStore {
    /// Create an empty store retaining at most `max_history` turns per user.
    ///
    /// Bounds below two turns are raised to two.
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_history: max_history.max(MIN_HISTORY),
        }
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user_id: &str) -> Vec<Turn> {
        self.sessions
            .get(user_id)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    fn append_exchange(&self, user_id: &str, user_turn: Turn, assistant_turn: Turn) {
        let mut history = self.sessions.entry(user_id.to_string()).or_default();
        history.push(user_turn);
        history.push(assistant_turn);

        let excess = history.len().saturating_sub(self.max_history);
        if excess > 0 {
            history.drain(..excess);
        }
        trace!(user_id, len = history.len(), evicted = excess, "Exchange appended");
    }

    fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
