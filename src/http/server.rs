//! HTTP server lifecycle.

use super::{AppState, router};
use eyre::{Result, WrapErr};
use std::{future::Future, net::SocketAddr};
use tracing::info;

/// Message board HTTP server.
pub struct Server {
    state: AppState,
}

impl Server {
    /// Creates a server that will serve `state`.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Binds `addr` and serves requests until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    /// while running.
    pub async fn run<F>(self, addr: SocketAddr, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(self.state);

        let server = axum::Server::try_bind(&addr)
            .wrap_err_with(|| format!("failed to bind {addr}"))?
            .serve(app.into_make_service());

        info!(local_addr = %server.local_addr(), "Running server...");

        server
            .with_graceful_shutdown(shutdown)
            .await
            .wrap_err("server failed")?;

        info!("Server stopped");
        Ok(())
    }
}
