//! Shared application state threaded through handlers.

use std::sync::Arc;

use citytrack_engine::{GameEngine, GameVariant};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, instrument};

/// Handle to the process-wide game engine.
///
/// The engine sits behind a mutex: each request locks it, executes to
/// completion, and unlocks, so decisions apply atomically per request.
/// Cloning the state clones the handle, not the engine.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<GameEngine>>,
}

impl AppState {
    /// Creates state owning a fresh engine for `variant`.
    #[instrument]
    pub fn new(variant: GameVariant) -> Self {
        info!(%variant, "Creating app state");
        Self {
            engine: Arc::new(Mutex::new(GameEngine::new(variant))),
        }
    }

    /// Locks the engine for the duration of a request.
    pub async fn engine(&self) -> MutexGuard<'_, GameEngine> {
        self.engine.lock().await
    }
}
