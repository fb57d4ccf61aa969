//! atomic-executor-core: the atomic node executor.
//!
//! Receives typed requests for the four executor operations and answers with
//! typed results. Execution is a dispatch on the request's node-type id into
//! an immutable [`HandlerRegistry`]:
//!
//! - a registered handler runs and its outputs come back as a `succeeded`
//!   result
//! - an unregistered id, or a handler that returns an error, comes back as a
//!   `failed` result carrying a structured [`ErrorInfo`]
//!
//! Failures never escape as Rust errors from the API; the transport only ever
//! sees a result.
//!
//! [`ErrorInfo`]: atomic_executor_model::ErrorInfo

pub mod api;
pub mod config;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod registry;

pub use api::AtomicExecutorApi;
pub use config::ExecutorConfig;
pub use error::{ExecutorError, HandlerError};
pub use executor::AtomicExecutor;
pub use registry::{HandlerFn, HandlerRegistry, NodeType};
