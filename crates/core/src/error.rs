use atomic_executor_model::ErrorInfo;

/// Wire code for a node-type id with no registered handler.
pub const UNKNOWN_NODE_TYPE: &str = "unknown_node_type";

/// Wire code for a registered handler that returned an error.
pub const HANDLER_FAILED: &str = "handler_failed";

/// Errors a node handler may return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    /// The inputs do not have the shape the handler expects.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The handler could not complete its work.
    #[error("{0}")]
    Failed(String),
}

/// Everything that turns a node run into a `failed` result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutorError {
    #[error("Unknown node_type_id: {node_type_id}")]
    UnknownNodeType { node_type_id: String },

    #[error("Handler for {node_type_id} failed: {source}")]
    HandlerFailed {
        node_type_id: String,
        #[source]
        source: HandlerError,
    },
}

impl ExecutorError {
    /// Stable machine-readable code placed in `ErrorInfo.code`.
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorError::UnknownNodeType { .. } => UNKNOWN_NODE_TYPE,
            ExecutorError::HandlerFailed { .. } => HANDLER_FAILED,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo::new(self.code(), self.to_string())
    }
}
