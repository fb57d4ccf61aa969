//! Atomic executor conformance test suite (A1-A8).
//!
//! Provides an `atomic_executor_conformance_tests!` macro that validates any
//! [`AtomicExecutorApi`](atomic_executor_core::AtomicExecutorApi)
//! implementation against the executor obligations: health, version,
//! echo dispatch, unknown node types, timestamps, run identity and cancel.

pub mod fixtures;
pub mod suite;
pub mod tests;
