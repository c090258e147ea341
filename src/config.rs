//! Environment configuration

use anyhow::{Context, anyhow};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://echo.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Settings> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Settings> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
        };

        let bind_address = var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
            .parse::<SocketAddr>()
            .context("BIND_ADDRESS must be a socket address such as 0.0.0.0:3000")?;

        let cors_origins = var("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| anyhow!("CORS_ORIGINS contains an invalid origin: {origin}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Settings {
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections,
            bind_address,
            cors_origins,
            log_level: var("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}
