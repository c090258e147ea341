//! Errors surfaced by the conversation service

use crate::infrastructure::error::StorageError;
use thiserror::Error;

/// Malformed caller input, detected before the store is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message must be a string")]
    MessageNotString,
    #[error("Invalid conversation ID")]
    InvalidConversationId,
}

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store failed. Effects of earlier steps are kept.
    #[error("storage failure")]
    Storage(#[from] StorageError),
}
