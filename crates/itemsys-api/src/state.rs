//! Application state shared across all routes

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use itemsys_core::{ItemService, UserService};

/// Default per-request backend call timeout.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared, read-only state: one handle per backend service, the global
/// call timeout, and the shutdown signal every request context chains off.
/// Built once at startup; concurrent reads need no locking.
#[derive(Clone)]
pub struct AppState {
    users: Arc<dyn UserService>,
    items: Arc<dyn ItemService>,
    call_timeout: Duration,
    shutdown: CancellationToken,
}

impl AppState {
    /// Create a new AppState with the given backend handles
    pub fn new(users: Arc<dyn UserService>, items: Arc<dyn ItemService>) -> Self {
        Self {
            users,
            items,
            call_timeout: DEFAULT_CALL_TIMEOUT,
            shutdown: CancellationToken::new(),
        }
    }

    /// Override the global backend call timeout
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Chain request cancellation off an external shutdown signal
    pub fn with_shutdown_token(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Handle to the user service
    pub fn users(&self) -> &Arc<dyn UserService> {
        &self.users
    }

    /// Handle to the item service
    pub fn items(&self) -> &Arc<dyn ItemService> {
        &self.items
    }

    /// Deadline applied to every backend call
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// The shutdown signal request contexts are derived from
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }
}
