//! Implementations for the service the app needs.
//!

use crate::core::echo::{EchoEngine, conversation_title};
use crate::core::error::ConversationError;
use crate::core::input::{EchoRequest, parse_conversation_id};
use crate::core::traits::{ConversationService, EchoReply};
use crate::infrastructure::entities::{Conversation, ConversationKey, Message, Sender};
use crate::infrastructure::traits::ConversationRepository;
use async_trait::async_trait;
use di::{Ref, inject, injectable};
use log::{debug, info};

/// Coordinates validation, conversation resolution and the user/echo save sequence.
///
/// Holds no mutable state; concurrent calls without a conversation id each
/// open their own conversation.
pub struct ConversationOrchestrator {
    repo: Ref<dyn ConversationRepository>,
    engine: EchoEngine,
}

#[injectable(ConversationService)]
impl ConversationOrchestrator {
    #[inject]
    pub fn new(repo: Ref<dyn ConversationRepository>) -> Self {
        ConversationOrchestrator {
            repo,
            engine: EchoEngine,
        }
    }
}

#[async_trait]
impl ConversationService for ConversationOrchestrator {
    async fn handle_echo(&self, request: EchoRequest) -> Result<EchoReply, ConversationError> {
        let (message, requested_conversation) = request.into_parts()?;

        let conversation_id = match requested_conversation {
            Some(key) => key,
            None => {
                let title = conversation_title(&message);
                let conversation = self.repo.create_conversation(&title).await?;
                info!("opened conversation {} ({:?})", conversation.id, conversation.title);
                ConversationKey::from(conversation.id)
            }
        };

        let user_message = self
            .repo
            .save_message(&message, Sender::User, &conversation_id)
            .await?;
        debug!("saved user message {} in {conversation_id}", user_message.id);

        let echo_text = self.engine.transform(&message);

        let echo_message = self
            .repo
            .save_message(&echo_text, Sender::Echo, &conversation_id)
            .await?;
        debug!("saved echo message {} in {conversation_id}", echo_message.id);

        Ok(EchoReply {
            echo_text,
            conversation_id,
        })
    }

    async fn list_messages(&self) -> Result<Vec<Message>, ConversationError> {
        Ok(self.repo.messages().await?)
    }

    async fn clear_messages(&self) -> Result<(), ConversationError> {
        self.repo.clear_messages().await?;
        info!("cleared all messages");
        Ok(())
    }

    async fn list_conversations(&self) -> Result<Vec<Conversation>, ConversationError> {
        Ok(self.repo.conversations().await?)
    }

    async fn list_conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<Message>, ConversationError> {
        let conversation = parse_conversation_id(conversation_id)?;
        Ok(self.repo.messages_by_conversation(&conversation).await?)
    }
}
