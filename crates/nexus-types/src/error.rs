use thiserror::Error;

use crate::llm::LlmError;

/// Errors from handling a single chat message.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("inference failed: {0}")]
    Inference(#[from] LlmError),
}

impl ChatError {
    /// Whether the failure was caused by the caller's input rather than the provider.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ChatError::EmptyMessage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_converts_into_chat_error() {
        let err: ChatError = LlmError::AuthenticationFailed.into();
        assert!(matches!(err, ChatError::Inference(LlmError::AuthenticationFailed)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_empty_message_is_input_error() {
        assert!(ChatError::EmptyMessage.is_input_error());
    }
}
