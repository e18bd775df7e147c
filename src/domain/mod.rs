mod message;
mod message_id;
mod message_role;

pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
