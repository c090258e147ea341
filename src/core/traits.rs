//! DI "Interfaces"

use crate::core::error::ConversationError;
use crate::core::input::EchoRequest;
use crate::infrastructure::entities::{self, ConversationKey};
use async_trait::async_trait;

/// Outcome of a successful echo exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoReply {
    pub echo_text: String,
    /// The conversation both messages were saved to: the caller's reference
    /// exactly as supplied, or the id of the newly opened conversation.
    pub conversation_id: ConversationKey,
}

#[async_trait]
pub trait ConversationService: Send + Sync {
    /// Records a user message and its echo, opening a conversation if none was given.
    ///
    /// The message is validated before any store access. A supplied
    /// conversation reference is not checked here; one the store cannot
    /// resolve fails as a storage error. Store failures abort the
    /// remaining steps without undoing earlier ones: a failed echo save leaves
    /// the user message (and a newly opened conversation) in place.
    async fn handle_echo(&self, request: EchoRequest) -> Result<EchoReply, ConversationError>;

    /// Lists every message across all conversations.
    async fn list_messages(&self) -> Result<Vec<entities::Message>, ConversationError>;

    /// Deletes every message. Idempotent.
    async fn clear_messages(&self) -> Result<(), ConversationError>;

    async fn list_conversations(&self) -> Result<Vec<entities::Conversation>, ConversationError>;

    /// Lists the messages of one conversation.
    ///
    /// Returns a validation error if `conversation_id` does not read as a
    /// finite number. Numbers naming no conversation give an empty list.
    async fn list_conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<entities::Message>, ConversationError>;
}
