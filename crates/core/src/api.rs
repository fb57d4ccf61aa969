use std::sync::Arc;

use async_trait::async_trait;

use atomic_executor_model::{
    AtomicExecuteResult, CancelAtomicNodeRunRequest, ExecuteAtomicNodeRunRequest, Health,
    HealthRequest, VersionInfo, VersionRequest,
};

/// The atomic executor operation contract.
///
/// Every method answers with a value, never an error: failures of a node run
/// are reported inside the [`AtomicExecuteResult`], and the remaining
/// operations have no failure modes.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync + 'static` so a single instance can
/// sit in axum application state and serve requests concurrently.
#[async_trait]
pub trait AtomicExecutorApi: Send + Sync + 'static {
    /// Report service health. The request carries nothing and is ignored.
    async fn health(&self, request: HealthRequest) -> Health;

    /// Report the static service identity. The request is ignored.
    async fn version(&self, request: VersionRequest) -> VersionInfo;

    /// Run one atomic node to a terminal state.
    async fn execute_atomic_node_run(
        &self,
        request: ExecuteAtomicNodeRunRequest,
    ) -> AtomicExecuteResult;

    /// Request cancellation of a node run. Completing without effect is a
    /// valid implementation.
    async fn cancel_atomic_node_run(&self, request: CancelAtomicNodeRunRequest);
}

#[async_trait]
impl<T: AtomicExecutorApi + ?Sized> AtomicExecutorApi for Arc<T> {
    async fn health(&self, request: HealthRequest) -> Health {
        (**self).health(request).await
    }

    async fn version(&self, request: VersionRequest) -> VersionInfo {
        (**self).version(request).await
    }

    async fn execute_atomic_node_run(
        &self,
        request: ExecuteAtomicNodeRunRequest,
    ) -> AtomicExecuteResult {
        (**self).execute_atomic_node_run(request).await
    }

    async fn cancel_atomic_node_run(&self, request: CancelAtomicNodeRunRequest) {
        (**self).cancel_atomic_node_run(request).await
    }
}
