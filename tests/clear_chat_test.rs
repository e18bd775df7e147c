use std::sync::Arc;

use palaver::application::ports::MessageRepository;
use palaver::application::services::ClearChatService;
use palaver::domain::{Message, MessageRole};
use palaver::infrastructure::persistence::InMemoryMessageRepository;

#[test]
fn given_populated_store_when_clearing_then_store_is_empty() {
    let repository: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
    repository.add_message(Message::new(MessageRole::User, "Test".to_string()));
    let service = ClearChatService::new(Arc::clone(&repository));

    service.execute();

    assert!(repository.messages().is_empty());
}

#[test]
fn given_empty_store_when_clearing_then_succeeds() {
    let repository: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
    let service = ClearChatService::new(Arc::clone(&repository));

    service.execute();

    assert!(repository.messages().is_empty());
}
