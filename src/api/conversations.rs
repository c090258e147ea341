//! Conversations endpoints

use crate::api::ApiError;
use crate::core::traits::ConversationService;
use axum::Json;
use axum::extract::Path;
use di_axum::Inject;

const DATABASE_FAILURE: &str = "Database error";

pub(crate) async fn list_conversations(
    Inject(conversation_service): Inject<dyn ConversationService>,
) -> Result<Json<Vec<schemas::Conversation>>, ApiError> {
    let conversations = conversation_service
        .list_conversations()
        .await
        .map_err(|e| ApiError::from_service("Get conversations", DATABASE_FAILURE, e))?;

    Ok(Json(
        conversations
            .into_iter()
            .map(schemas::Conversation::from)
            .collect(),
    ))
}

pub(crate) async fn conversation_messages(
    Inject(conversation_service): Inject<dyn ConversationService>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<schemas::Message>>, ApiError> {
    let messages = conversation_service
        .list_conversation_messages(&conversation_id)
        .await
        .map_err(|e| {
            ApiError::from_service("Get conversation messages", DATABASE_FAILURE, e)
        })?;

    Ok(Json(messages.into_iter().map(schemas::Message::from).collect()))
}

pub mod schemas {
    use crate::infrastructure::entities::{self, ConversationKey, Sender};
    use chrono::{DateTime, Utc};
    use serde::Serialize;

    #[derive(Serialize, Debug)]
    pub struct EchoResponse {
        pub message: String,
        /// Echoes the caller's reference as sent, or the new conversation's id.
        #[serde(rename = "conversationId")]
        pub conversation_id: ConversationKey,
    }

    #[derive(Serialize, Debug)]
    pub struct ClearResponse {
        pub success: bool,
    }

    #[derive(Serialize, Debug)]
    pub struct Conversation {
        pub id: i64,
        pub title: String,
        pub created_at: DateTime<Utc>,
    }

    impl From<entities::Conversation> for Conversation {
        fn from(conversation: entities::Conversation) -> Self {
            Conversation {
                id: conversation.id.0,
                title: conversation.title,
                created_at: conversation.created_at,
            }
        }
    }

    #[derive(Serialize, Debug)]
    pub struct Message {
        pub id: i64,
        pub conversation_id: i64,
        pub sender: Sender,
        pub text: String,
        pub timestamp: DateTime<Utc>,
    }

    impl From<entities::Message> for Message {
        fn from(message: entities::Message) -> Self {
            Message {
                id: message.id,
                conversation_id: message.conversation_id.0,
                sender: message.sender,
                text: message.text,
                timestamp: message.timestamp,
            }
        }
    }
}
