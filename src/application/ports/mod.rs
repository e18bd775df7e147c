mod chat_service;
mod message_repository;

pub use chat_service::{ChatService, ChatServiceError};
pub use message_repository::MessageRepository;
