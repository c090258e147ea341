//! DB Repository abstractions

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::{Conversation, ConversationKey, Message, Sender};
use crate::infrastructure::error::StorageError;
use crate::infrastructure::traits::ConversationRepository;
use async_trait::async_trait;
use chrono::Utc;
use di::{Ref, injectable};
use serde_json::Value;
use sqlx::query::QueryAs;
use sqlx::{Database, Sqlite};

type SqliteQueryAs<'q, O> = QueryAs<'q, Sqlite, O, <Sqlite as Database>::Arguments<'q>>;

/// Binds a conversation reference with its natural SQL type.
///
/// Strings go in as text, so integer strings resolve through column affinity
/// and anything else fails the foreign key or matches no rows.
fn bind_conversation<'q, O>(
    query: SqliteQueryAs<'q, O>,
    conversation: &'q ConversationKey,
) -> Result<SqliteQueryAs<'q, O>, StorageError> {
    match &conversation.0 {
        Value::Number(n) => match n.as_i64() {
            Some(id) => Ok(query.bind(id)),
            None => Ok(query.bind(n.as_f64())),
        },
        Value::String(s) => Ok(query.bind(s.as_str())),
        other => Err(StorageError::UnsupportedKey(other.to_string())),
    }
}

#[injectable(ConversationRepository)]
pub struct DbConversationRepository {
    connection: Ref<DatabaseConnection>,
}

impl DbConversationRepository {
    pub fn new(connection: Ref<DatabaseConnection>) -> Self {
        DbConversationRepository { connection }
    }
}

#[async_trait]
impl ConversationRepository for DbConversationRepository {
    async fn create_conversation(&self, title: &str) -> Result<Conversation, StorageError> {
        let conversation =
            sqlx::query_as("INSERT INTO conversations (title, created_at) VALUES (?, ?) RETURNING *")
                .bind(title)
                .bind(Utc::now())
                .fetch_one(&**self.connection)
                .await?;

        Ok(conversation)
    }

    async fn save_message(
        &self,
        text: &str,
        sender: Sender,
        conversation: &ConversationKey,
    ) -> Result<Message, StorageError> {
        let message = bind_conversation(
            sqlx::query_as(
                "INSERT INTO messages (conversation_id, sender, text, timestamp) VALUES (?, ?, ?, ?) RETURNING *",
            ),
            conversation,
        )?
        .bind(sender)
        .bind(text)
        .bind(Utc::now())
        .fetch_one(&**self.connection)
        .await?;

        Ok(message)
    }

    async fn messages(&self) -> Result<Vec<Message>, StorageError> {
        let messages = sqlx::query_as("SELECT * FROM messages ORDER BY id ASC")
            .fetch_all(&**self.connection)
            .await?;

        Ok(messages)
    }

    async fn clear_messages(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM messages")
            .execute(&**self.connection)
            .await?;

        Ok(())
    }

    async fn conversations(&self) -> Result<Vec<Conversation>, StorageError> {
        let conversations = sqlx::query_as("SELECT * FROM conversations ORDER BY id ASC")
            .fetch_all(&**self.connection)
            .await?;

        Ok(conversations)
    }

    async fn messages_by_conversation(
        &self,
        conversation: &ConversationKey,
    ) -> Result<Vec<Message>, StorageError> {
        let messages = bind_conversation(
            sqlx::query_as("SELECT * FROM messages WHERE conversation_id = ? ORDER BY id ASC"),
            conversation,
        )?
        .fetch_all(&**self.connection)
        .await?;

        Ok(messages)
    }
}
