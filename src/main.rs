//! Echo chat web server
//!
//! (c) Softlandia 2025

use tokio_echo_chat_api::api;
use tokio_echo_chat_api::config::Settings;
use tokio_echo_chat_api::infrastructure::database::{self, DatabaseConnection};
use tokio_echo_chat_api::service_provider;

use anyhow::Context;
use log::{error, info};
use tokio::runtime::{Builder, Runtime};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task(settings))
}

async fn web_server_task(settings: Settings) -> anyhow::Result<()> {
    let pool = database::connect(&settings)
        .await
        .context("cannot connect to database")?;
    database::migrate(&pool)
        .await
        .context("cannot apply database migrations")?;
    DatabaseConnection::install_pool(pool.clone());

    let app = api::app(service_provider()?, &settings);

    let listener = tokio::net::TcpListener::bind(settings.bind_address)
        .await
        .with_context(|| format!("cannot bind {}", settings.bind_address))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("cannot listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
