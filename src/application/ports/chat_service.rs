use async_trait::async_trait;

use crate::domain::Message;

/// Adapter boundary to the remote inference endpoint. Implementations are
/// stateless apart from fixed configuration and safe to share across calls.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Posts the full conversation history and returns the assistant's reply
    /// text. The history must be non-empty and in conversation order; the
    /// endpoint is stateless and replays the entire context on every call.
    ///
    /// No retries happen here. Retry is a caller-level policy.
    async fn send_chat(&self, history: &[Message]) -> Result<String, ChatServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
