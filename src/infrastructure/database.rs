//! Pooled SQLite connection

use crate::config::Settings;
use crate::infrastructure::error::StorageError;
use di::inject;
use di::injectable;
use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Pool handed to every `DatabaseConnection` the container creates.
static INSTALLED_POOL: RwLock<Option<SqlitePool>> = RwLock::new(None);

pub struct DatabaseConnection {
    connection: SqlitePool,
}

#[injectable]
impl DatabaseConnection {
    /// # Panics
    ///
    /// Panics if no pool has been installed with [`DatabaseConnection::install_pool`].
    #[inject]
    pub fn create() -> DatabaseConnection {
        let pool = Self::installed_pool()
            .expect("a database pool must be installed before the service provider is used");

        DatabaseConnection { connection: pool }
    }
}

impl DatabaseConnection {
    pub fn from_pool(pool: SqlitePool) -> Self {
        DatabaseConnection { connection: pool }
    }

    /// Makes `pool` the one resolved through dependency injection.
    pub fn install_pool(pool: SqlitePool) {
        *INSTALLED_POOL
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(pool);
    }

    pub fn clear_installed_pool() {
        INSTALLED_POOL
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    fn installed_pool() -> Option<SqlitePool> {
        INSTALLED_POOL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for DatabaseConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}

/// Opens the pool described by `settings`, creating the database file if needed.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    info!("connected to {}", settings.database_url);
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
