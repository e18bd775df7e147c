use std::sync::Arc;

use crate::application::ports::{ChatService, ChatServiceError, MessageRepository};
use crate::domain::{Message, MessageRole};

/// Orchestrates one conversational turn: append the user message, send the
/// full history to the inference endpoint, append the reply.
///
/// The store never keeps a user message that did not receive a reply: a
/// failed send rolls the just-appended user message back before the error
/// propagates, so each `execute` changes the store length by exactly +2
/// (success) or 0 (failure).
pub struct SendMessageService<C>
where
    C: ChatService,
{
    chat_service: Arc<C>,
    repository: Arc<dyn MessageRepository>,
}

impl<C> SendMessageService<C>
where
    C: ChatService,
{
    pub fn new(chat_service: Arc<C>, repository: Arc<dyn MessageRepository>) -> Self {
        Self {
            chat_service,
            repository,
        }
    }

    /// Callers are expected to serialize invocations; two concurrent calls
    /// can interleave store mutations around the await point.
    pub async fn execute(&self, user_text: &str) -> Result<Message, ChatServiceError> {
        let user_message = Message::new(MessageRole::User, user_text.to_string());
        self.repository.add_message(user_message);

        let history = self.repository.messages();
        tracing::debug!(history_len = history.len(), "Sending conversation turn");

        match self.chat_service.send_chat(&history).await {
            Ok(reply) => {
                let assistant_message = Message::new(MessageRole::Assistant, reply);
                self.repository.add_message(assistant_message.clone());
                Ok(assistant_message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Send failed, rolling back user message");
                self.repository.remove_last_message();
                Err(e)
            }
        }
    }
}
