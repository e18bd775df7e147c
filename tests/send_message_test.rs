use std::sync::Arc;

use palaver::application::ports::{ChatServiceError, MessageRepository};
use palaver::application::services::SendMessageService;
use palaver::domain::{Message, MessageRole};
use palaver::infrastructure::api::MockChatService;
use palaver::infrastructure::persistence::InMemoryMessageRepository;

fn service_with(
    chat_service: MockChatService,
) -> (
    SendMessageService<MockChatService>,
    Arc<MockChatService>,
    Arc<dyn MessageRepository>,
) {
    let chat_service = Arc::new(chat_service);
    let repository: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
    let service = SendMessageService::new(Arc::clone(&chat_service), Arc::clone(&repository));
    (service, chat_service, repository)
}

#[tokio::test]
async fn given_successful_send_when_executing_then_stores_user_and_assistant_turns() {
    let (service, chat_service, repository) = service_with(MockChatService::replying("Hi there"));

    let result = service.execute("Hello").await.unwrap();

    let messages = repository.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "Hello");
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[1].content, "Hi there");

    assert_eq!(result.role, MessageRole::Assistant);
    assert_eq!(result.content, "Hi there");
    assert_eq!(chat_service.call_count(), 1);
}

#[tokio::test]
async fn given_failing_send_when_executing_then_store_is_rolled_back() {
    let (service, _, repository) = service_with(MockChatService::failing(|| {
        ChatServiceError::Transport("connection refused".to_string())
    }));

    let result = service.execute("Hello").await;

    assert!(repository.messages().is_empty());
    assert!(matches!(result, Err(ChatServiceError::Transport(_))));
}

#[tokio::test]
async fn given_timeout_when_executing_then_timeout_is_propagated_unchanged() {
    let (service, _, repository) = service_with(MockChatService::failing(|| {
        ChatServiceError::Timeout
    }));

    let error = service.execute("Hello").await.unwrap_err();

    assert!(matches!(error, ChatServiceError::Timeout));
    assert!(repository.messages().is_empty());
}

#[tokio::test]
async fn given_invalid_endpoint_when_executing_then_kind_is_propagated_unchanged() {
    let (service, _, repository) = service_with(MockChatService::failing(|| {
        ChatServiceError::InvalidEndpoint("bad".to_string())
    }));

    let error = service.execute("Hello").await.unwrap_err();

    assert!(matches!(error, ChatServiceError::InvalidEndpoint(_)));
    assert!(repository.messages().is_empty());
}

#[tokio::test]
async fn given_malformed_response_when_executing_then_kind_is_propagated_unchanged() {
    let (service, _, repository) = service_with(MockChatService::failing(|| {
        ChatServiceError::MalformedResponse("no content".to_string())
    }));

    let error = service.execute("Hello").await.unwrap_err();

    assert!(matches!(error, ChatServiceError::MalformedResponse(_)));
    assert!(repository.messages().is_empty());
}

#[tokio::test]
async fn given_prior_turns_when_executing_then_full_history_is_sent_in_order() {
    let (service, chat_service, repository) = service_with(MockChatService::replying("Reply"));
    repository.add_message(Message::new(MessageRole::User, "First".to_string()));
    repository.add_message(Message::new(MessageRole::Assistant, "Response".to_string()));

    service.execute("Second").await.unwrap();

    let history = chat_service.last_history().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].content, "First");
    assert_eq!(history[0].role, MessageRole::User);
    assert_eq!(history[1].content, "Response");
    assert_eq!(history[1].role, MessageRole::Assistant);
    assert_eq!(history[2].content, "Second");
    assert_eq!(history[2].role, MessageRole::User);
}

#[tokio::test]
async fn given_failing_send_with_prior_turns_when_executing_then_prior_turns_survive() {
    let (service, _, repository) = service_with(MockChatService::failing(|| {
        ChatServiceError::Transport("down".to_string())
    }));
    repository.add_message(Message::new(MessageRole::User, "First".to_string()));
    repository.add_message(Message::new(MessageRole::Assistant, "Response".to_string()));

    let before = repository.messages().len();
    let result = service.execute("Second").await;

    assert!(result.is_err());
    let messages = repository.messages();
    assert_eq!(messages.len(), before);
    assert_eq!(messages[0].content, "First");
    assert_eq!(messages[1].content, "Response");
}
