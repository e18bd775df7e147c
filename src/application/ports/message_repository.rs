use crate::domain::Message;

/// Ordered in-memory store of the session's conversation. Insertion order is
/// conversation order and is replayed verbatim to the inference endpoint.
///
/// All operations are infallible by contract: `remove_last_message` on an
/// empty store is a deliberate silent no-op, not an error.
pub trait MessageRepository: Send + Sync {
    /// Consistent ordered snapshot of the current sequence.
    fn messages(&self) -> Vec<Message>;

    fn add_message(&self, message: Message);

    fn remove_last_message(&self);

    fn clear_all(&self);
}
