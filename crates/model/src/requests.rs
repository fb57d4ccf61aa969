//! One typed request per executor operation.
//!
//! Health and version requests carry nothing; they exist so every operation
//! keeps the same `request -> response` shape.

use serde::{Deserialize, Serialize};

use crate::types::AtomicExecuteRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionRequest;

/// Execute call: wraps the node-run body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecuteAtomicNodeRunRequest {
    pub body: AtomicExecuteRequest,
}

impl From<AtomicExecuteRequest> for ExecuteAtomicNodeRunRequest {
    fn from(body: AtomicExecuteRequest) -> Self {
        ExecuteAtomicNodeRunRequest { body }
    }
}

/// Cancel call for a previously submitted node run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelAtomicNodeRunRequest {
    pub node_run_id: String,
}

impl CancelAtomicNodeRunRequest {
    pub fn new(node_run_id: impl Into<String>) -> Self {
        CancelAtomicNodeRunRequest {
            node_run_id: node_run_id.into(),
        }
    }
}
