mod mock_chat_service;
mod ollama_client;

pub use mock_chat_service::MockChatService;
pub use ollama_client::{
    OllamaChatService, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
