//! SessionStore trait definition.

use std::sync::Arc;

use nexus_types::chat::Turn;

/// Mapping from user id to that user's ordered, bounded history.
///
/// Both operations are total: an unseen user id reads as an empty history,
/// and appends cannot fail. Implementations must make `append_exchange`
/// atomic per user id, so two concurrent appends for the same user never
/// interleave their turns and no reader observes a user turn without its
/// assistant reply.
pub trait SessionStore: Send + Sync {
    /// Snapshot of the history for `user_id`, oldest turn first.
    fn get(&self, user_id: &str) -> Vec<Turn>;

    /// Append a user turn and its assistant reply, then evict the oldest
    /// turns until the history fits the store's bound.
    fn append_exchange(&self, user_id: &str, user_turn: Turn, assistant_turn: Turn);

    /// Number of user ids with a recorded history.
    fn session_count(&self) -> usize;
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, user_id: &str) -> Vec<Turn> {
        (**self).get(user_id)
    }

    fn append_exchange(&self, user_id: &str, user_turn: Turn, assistant_turn: Turn) {
        (**self).append_exchange(user_id, user_turn, assistant_turn)
    }

    fn session_count(&self) -> usize {
        (**self).session_count()
    }
}
