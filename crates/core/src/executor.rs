use async_trait::async_trait;
use time::OffsetDateTime;

use atomic_executor_model::{
    AtomicExecuteResult, CancelAtomicNodeRunRequest, ExecuteAtomicNodeRunRequest, Health,
    HealthRequest, Inputs, Outputs, VersionInfo, VersionRequest,
};

use crate::api::AtomicExecutorApi;
use crate::config::ExecutorConfig;
use crate::error::ExecutorError;
use crate::registry::HandlerRegistry;

/// The reference atomic executor.
///
/// Holds the service identity and the handler registry, both fixed at
/// construction. Each call is independent; nothing is shared between calls
/// except this read-only state.
#[derive(Debug, Clone)]
pub struct AtomicExecutor {
    identity: VersionInfo,
    registry: HandlerRegistry,
}

impl AtomicExecutor {
    /// Executor with the built-in registry.
    pub fn new(config: ExecutorConfig) -> Self {
        Self::with_registry(config, HandlerRegistry::builtin())
    }

    pub fn with_registry(config: ExecutorConfig, registry: HandlerRegistry) -> Self {
        AtomicExecutor {
            identity: config.identity(),
            registry,
        }
    }

    pub fn identity(&self) -> &VersionInfo {
        &self.identity
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    fn run_handler(&self, node_type_id: &str, inputs: &Inputs) -> Result<Outputs, ExecutorError> {
        let handler = self.registry.lookup(node_type_id)?;
        handler(inputs).map_err(|source| ExecutorError::HandlerFailed {
            node_type_id: node_type_id.to_string(),
            source,
        })
    }
}

impl Default for AtomicExecutor {
    fn default() -> Self {
        Self::new(ExecutorConfig::default())
    }
}

#[async_trait]
impl AtomicExecutorApi for AtomicExecutor {
    async fn health(&self, request: HealthRequest) -> Health {
        let _ = request;
        Health::ok_now()
    }

    async fn version(&self, request: VersionRequest) -> VersionInfo {
        let _ = request;
        self.identity.clone()
    }

    async fn execute_atomic_node_run(
        &self,
        request: ExecuteAtomicNodeRunRequest,
    ) -> AtomicExecuteResult {
        let started_at = OffsetDateTime::now_utc();
        let body = request.body;
        let node_type_id = body.node_type_ref.node_type_id.as_str();

        tracing::info!(
            node_run_id = %body.node_run_id,
            run_id = %body.run_id,
            node_type_id,
            "executing atomic node run"
        );

        match self.run_handler(node_type_id, &body.inputs) {
            Ok(outputs) => {
                let result = AtomicExecuteResult::succeeded(
                    body.node_run_id,
                    outputs,
                    started_at,
                    OffsetDateTime::now_utc(),
                );
                tracing::info!(node_run_id = %result.node_run_id, "atomic node run succeeded");
                result
            }
            Err(err) => {
                tracing::warn!(
                    node_run_id = %body.node_run_id,
                    code = err.code(),
                    error = %err,
                    "atomic node run failed"
                );
                AtomicExecuteResult::failed(
                    body.node_run_id,
                    err.to_error_info(),
                    started_at,
                    OffsetDateTime::now_utc(),
                )
            }
        }
    }

    async fn cancel_atomic_node_run(&self, request: CancelAtomicNodeRunRequest) {
        // Runs complete synchronously inside execute, so there is never an
        // in-flight run to stop.
        tracing::debug!(node_run_id = %request.node_run_id, "cancel requested; no-op");
    }
}
