//! Echo chat web server - Library exports for testing
//!
//! (c) Softlandia 2025

pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

use crate::core::services::ConversationOrchestrator;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::repositories::DbConversationRepository;
use anyhow::anyhow;
use di::{Injectable, ServiceCollection, ServiceProvider};

/// Registers the database, repository and conversation service.
///
/// The database pool must be installed with [`DatabaseConnection::install_pool`]
/// before any service is resolved: resolving the database connection without
/// one panics. The binary installs it after migrations and before serving.
pub fn service_provider() -> anyhow::Result<ServiceProvider> {
    ServiceCollection::new()
        .add(DatabaseConnection::singleton())
        .add(DbConversationRepository::scoped())
        .add(ConversationOrchestrator::scoped())
        .build_provider()
        .map_err(|e| anyhow!("invalid service registrations: {e}"))
}
