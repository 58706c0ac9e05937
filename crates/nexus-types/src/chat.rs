//! Conversation types: turns, roles, and the orchestrator's reply.

use serde::{Deserialize, Serialize};

/// User identifier used when a request does not name one.
pub const DEFAULT_USER_ID: &str = "default-user";

/// Role of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a conversation.
///
/// Fields are private: a turn is never edited after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: TurnRole,
    content: String,
}

impl Turn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(TurnRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    pub fn role(&self) -> TurnRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Successful outcome of one chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text.
    pub reply: String,
    /// The user id the exchange was recorded under (after defaulting).
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_serializes_with_lowercase_role() {
        let turn = Turn::assistant("hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "assistant", "content": "hello" }));
    }

    #[test]
    fn test_turn_constructors() {
        assert_eq!(Turn::system("s").role(), TurnRole::System);
        assert_eq!(Turn::user("u").role(), TurnRole::User);
        let a = Turn::assistant("a");
        assert_eq!(a.role(), TurnRole::Assistant);
        assert_eq!(a.content(), "a");
    }
}
