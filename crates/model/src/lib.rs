//! atomic-executor-model: Shared wire types for the atomic executor API.
//!
//! Typed request and response bodies for the four operations an atomic
//! executor serves (health, version, execute, cancel). The core, the HTTP
//! host and the conformance suite all speak these types, so the JSON shape is
//! defined in exactly one place.

pub mod requests;
pub mod types;

pub use requests::*;
pub use types::*;

/// API versions every executor built on these types supports.
pub const SUPPORTED_API_VERSIONS: &[&str] = &["v1"];
