use std::sync::Arc;

use crate::application::ports::{ChatService, MessageRepository};
use crate::application::services::{ClearChatService, SendMessageService};
use crate::domain::Message;

/// Mediates user intents into orchestrator calls and owns the observable UI
/// state: the input buffer, the loading flag and the error text. The
/// rendering surface feeds the buffer, triggers the intents and polls the
/// getters after each one.
///
/// Turns are single-flight: methods take `&mut self`, and `send_message`
/// additionally refuses to start while a send is in flight.
pub struct ChatController<C>
where
    C: ChatService,
{
    repository: Arc<dyn MessageRepository>,
    send_message_service: SendMessageService<C>,
    clear_chat_service: ClearChatService,
    input_text: String,
    is_loading: bool,
    error_message: Option<String>,
}

impl<C> ChatController<C>
where
    C: ChatService,
{
    pub fn new(
        repository: Arc<dyn MessageRepository>,
        send_message_service: SendMessageService<C>,
        clear_chat_service: ClearChatService,
    ) -> Self {
        Self {
            repository,
            send_message_service,
            clear_chat_service,
            input_text: String::new(),
            is_loading: false,
            error_message: None,
        }
    }

    /// Snapshot of the conversation for rendering.
    pub fn messages(&self) -> Vec<Message> {
        self.repository.messages()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Submits the input buffer as one conversational turn. Whitespace-only
    /// input is ignored; so is a send requested while one is in flight.
    pub async fn send_message(&mut self) {
        let trimmed = self.input_text.trim().to_string();
        if trimmed.is_empty() || self.is_loading {
            return;
        }

        self.input_text.clear();
        self.is_loading = true;
        self.error_message = None;

        match self.send_message_service.execute(&trimmed).await {
            Ok(_) => {
                self.is_loading = false;
            }
            Err(e) => {
                self.is_loading = false;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Clears the conversation and any prior error text.
    pub fn clear_chat(&mut self) {
        self.clear_chat_service.execute();
        self.error_message = None;
    }

    /// Re-submits the last stored message if it is an unanswered user turn.
    /// No-op otherwise, leaving the input buffer untouched.
    pub async fn retry_last_message(&mut self) {
        let Some(last) = self.repository.messages().pop() else {
            return;
        };
        if !last.is_user() {
            return;
        }

        self.input_text = last.content;
        self.repository.remove_last_message();
        self.send_message().await;
    }
}
