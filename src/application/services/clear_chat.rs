use std::sync::Arc;

use crate::application::ports::MessageRepository;

/// Empties the conversation store. Unconditional success.
pub struct ClearChatService {
    repository: Arc<dyn MessageRepository>,
}

impl ClearChatService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) {
        self.repository.clear_all();
    }
}
