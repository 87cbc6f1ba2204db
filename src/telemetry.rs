//! Tracing subscriber setup for the server binary.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "message_board=debug,info";

/// Installs a compact formatting subscriber as the global default.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = FmtSubscriber::builder()
        .compact()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
