//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities::{self, ConversationKey, Sender};
use crate::infrastructure::error::StorageError;
use async_trait::async_trait;

/// Conversation and message persistence.
///
/// Implementations own their own consistency; callers issue requests
/// sequentially and never lock around them.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Creates a conversation with the given title and returns it with its new id.
    async fn create_conversation(&self, title: &str)
    -> Result<entities::Conversation, StorageError>;

    /// Appends a message to a conversation.
    ///
    /// Fails if `conversation` does not name an existing conversation.
    async fn save_message(
        &self,
        text: &str,
        sender: Sender,
        conversation: &ConversationKey,
    ) -> Result<entities::Message, StorageError>;

    /// All messages across every conversation, in insertion order.
    async fn messages(&self) -> Result<Vec<entities::Message>, StorageError>;

    /// Deletes every message. Conversations are kept.
    async fn clear_messages(&self) -> Result<(), StorageError>;

    async fn conversations(&self) -> Result<Vec<entities::Conversation>, StorageError>;

    /// Messages of the conversation `conversation` names; empty when it names none.
    async fn messages_by_conversation(
        &self,
        conversation: &ConversationKey,
    ) -> Result<Vec<entities::Message>, StorageError>;
}
