//! Response bodies and the node-run data model.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Node inputs: a JSON object keyed by input name.
pub type Inputs = serde_json::Map<String, serde_json::Value>;

/// Node outputs: a JSON object keyed by output name.
pub type Outputs = serde_json::Map<String, serde_json::Value>;

// ── Health ──────────────────────────────────────────────────────────

/// Coarse service status reported by the health operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Degraded,
    Down,
}

/// Health report, computed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: Status,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
}

impl Health {
    /// A healthy report stamped with the current UTC time.
    pub fn ok_now() -> Self {
        Health {
            status: Status::Ok,
            time: OffsetDateTime::now_utc(),
        }
    }
}

// ── Version ─────────────────────────────────────────────────────────

/// Static service identity exposed by the version operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfo {
    pub service_name: String,
    pub service_version: String,
    pub supported_api_versions: Vec<String>,
}

impl VersionInfo {
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        VersionInfo {
            service_name: service_name.into(),
            service_version: service_version.into(),
            supported_api_versions: crate::SUPPORTED_API_VERSIONS
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

// ── Node runs ───────────────────────────────────────────────────────

/// Reference to a node type. Dispatch keys on `node_type_id` alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeTypeRef {
    pub node_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Body of an execute call: one atomic node run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtomicExecuteRequest {
    pub node_run_id: String,
    pub run_id: String,
    pub node_type_ref: NodeTypeRef,
    #[serde(default)]
    pub inputs: Inputs,
}

/// Lifecycle state of a node run.
///
/// An atomic executor only ever reports the terminal `Succeeded` or `Failed`
/// states; the others exist for callers that track runs over time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeRunState {
    Pending,
    Running,
    Succeeded,
    Failed,
    Canceled,
}

impl NodeRunState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NodeRunState::Succeeded | NodeRunState::Failed | NodeRunState::Canceled
        )
    }
}

/// Structured error carried inside a failed result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorInfo {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Outcome of one atomic node run.
///
/// Build with [`AtomicExecuteResult::succeeded`] or
/// [`AtomicExecuteResult::failed`]: a failed result always has an error and
/// no outputs, a succeeded one always has outputs and no error, and
/// `ended_at` is never earlier than `started_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtomicExecuteResult {
    pub node_run_id: String,
    pub state: NodeRunState,
    pub outputs: Option<Outputs>,
    pub output_artifacts: Option<Vec<serde_json::Value>>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub error: Option<ErrorInfo>,
}

impl AtomicExecuteResult {
    pub fn succeeded(
        node_run_id: impl Into<String>,
        outputs: Outputs,
        started_at: OffsetDateTime,
        ended_at: OffsetDateTime,
    ) -> Self {
        AtomicExecuteResult {
            node_run_id: node_run_id.into(),
            state: NodeRunState::Succeeded,
            outputs: Some(outputs),
            output_artifacts: None,
            started_at,
            ended_at: ended_at.max(started_at),
            error: None,
        }
    }

    pub fn failed(
        node_run_id: impl Into<String>,
        error: ErrorInfo,
        started_at: OffsetDateTime,
        ended_at: OffsetDateTime,
    ) -> Self {
        AtomicExecuteResult {
            node_run_id: node_run_id.into(),
            state: NodeRunState::Failed,
            outputs: None,
            output_artifacts: None,
            started_at,
            ended_at: ended_at.max(started_at),
            error: Some(error),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.state == NodeRunState::Succeeded
    }
}
