mod clear_chat;
mod send_message;

pub use clear_chat::ClearChatService;
pub use send_message::SendMessageService;
