use std::sync::RwLock;

use crate::application::ports::MessageRepository;
use crate::domain::Message;

/// Session-scoped conversation store. Nothing is persisted beyond process
/// memory; the store lives as long as the session does.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageRepository for InMemoryMessageRepository {
    fn messages(&self) -> Vec<Message> {
        self.messages.read().expect("message store lock poisoned").clone()
    }

    fn add_message(&self, message: Message) {
        self.messages
            .write()
            .expect("message store lock poisoned")
            .push(message);
    }

    fn remove_last_message(&self) {
        // Silent no-op on an empty store, per the repository contract.
        self.messages
            .write()
            .expect("message store lock poisoned")
            .pop();
    }

    fn clear_all(&self) {
        self.messages
            .write()
            .expect("message store lock poisoned")
            .clear();
    }
}
