//! CityTrack HTTP layer - the JSON API in front of the game engine
//!
//! This crate turns a [`citytrack_engine::GameEngine`] into a small REST
//! service: an axum router with one handler per endpoint, a typed API
//! error that renders as a JSON body plus status code, and a TOML/env
//! server configuration.
//!
//! State is process-lifetime memory only; restarting the server loses the
//! current session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod routes;
mod state;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - API errors
pub use error::{ApiError, ErrorCode};

// Crate-level exports - Router and state
pub use routes::router;
pub use state::AppState;

use std::net::SocketAddr;

use derive_more::{Display, Error, From};
use tokio::net::TcpListener;
use tracing::info;

/// Errors from binding or serving the HTTP listener.
#[derive(Debug, Display, Error, From)]
pub enum ServeError {
    /// Socket bind or accept failure.
    #[display("server io error: {_0}")]
    Io(std::io::Error),
}

/// Binds `addr` and serves the API until the process is stopped.
///
/// # Errors
///
/// Returns [`ServeError`] when the listener cannot bind or the accept
/// loop fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), ServeError> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
