//! Runs the message board HTTP server.
//!
//! Configuration comes from the environment (optionally via `.env`):
//!
//! ```text
//! DATABASE_URL=postgres://board@localhost/board   # omit for the in-memory store
//! BIND_ADDR=127.0.0.1:5555
//! DATABASE_POOL_SIZE=10
//! RUST_LOG=message_board=debug,info
//! ```

use std::sync::Arc;

use eyre::{Result, WrapErr};
use message_board::{
    config::Config,
    http::{AppState, Server},
    message::{
        adapters::{memory::InMemoryMessageStore, postgres::PostgresMessageStore},
        ports::MessageStore,
    },
    telemetry,
};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_result = dotenv::dotenv();

    telemetry::init().wrap_err("failed to install tracing subscriber")?;

    match dotenv_result {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(err) => debug!(%err, "no .env file loaded"),
    }

    if let Err(err) = run().await {
        error!("{err:?}");
        return Err(err);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let config = Config::from_env().wrap_err("invalid configuration")?;
    let store = build_store(&config).await?;

    let server = Server::new(AppState::new(store));
    server.run(config.bind_addr, shutdown_signal()).await
}

async fn build_store(config: &Config) -> Result<Arc<dyn MessageStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL is not set; messages are kept in memory only");
        return Ok(Arc::new(InMemoryMessageStore::new()));
    };

    let pool_size = config.pool_size;
    let url = database_url.to_owned();
    let store = tokio::task::spawn_blocking(move || PostgresMessageStore::connect(&url, pool_size))
        .await
        .wrap_err("database connect task panicked")?
        .wrap_err("failed to connect to PostgreSQL")?;
    store
        .ensure_schema()
        .await
        .wrap_err("failed to create message schema")?;

    info!("using PostgreSQL message store");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C; shutting down"),
        Err(err) => error!(%err, "failed to listen for Ctrl-C"),
    }
}
