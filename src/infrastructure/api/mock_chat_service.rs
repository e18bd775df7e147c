use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ChatService, ChatServiceError};
use crate::domain::Message;

/// Scripted [`ChatService`] double. Records every history it is handed so
/// tests can assert exactly what would have gone over the wire.
pub struct MockChatService {
    reply: String,
    failure: Option<fn() -> ChatServiceError>,
    captured: Mutex<Vec<Vec<Message>>>,
}

impl MockChatService {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            failure: None,
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: fn() -> ChatServiceError) -> Self {
        Self {
            reply: String::new(),
            failure: Some(failure),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.captured.lock().unwrap().len()
    }

    /// History captured on the most recent call.
    pub fn last_history(&self) -> Option<Vec<Message>> {
        self.captured.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatService for MockChatService {
    async fn send_chat(&self, history: &[Message]) -> Result<String, ChatServiceError> {
        self.captured.lock().unwrap().push(history.to_vec());

        match self.failure {
            Some(make_error) => Err(make_error()),
            None => Ok(self.reply.clone()),
        }
    }
}
