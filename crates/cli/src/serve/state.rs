//! Application state.

use std::sync::Arc;

use atomic_executor_core::AtomicExecutorApi;

/// Application state shared across request handlers.
pub(crate) struct AppState {
    /// The executor serving every operation. Read-only after startup.
    pub(crate) executor: Arc<dyn AtomicExecutorApi>,
}
