//! A2: Version obligation.
//!
//! Version MUST return the construction-time identity, identically on every
//! call, and MUST list `v1` among the supported API versions.

use atomic_executor_core::AtomicExecutorApi;
use atomic_executor_model::{VersionInfo, VersionRequest};

use crate::fixtures;

/// A2: Version is stable, non-empty and supports `v1`.
pub async fn test_a02_version_stable<E: AtomicExecutorApi>(executor: &E) -> Result<(), String> {
    let first = executor.version(VersionRequest).await;

    if first.service_name.is_empty() {
        return Err("A2: service_name is empty".to_string());
    }
    if first.service_version.is_empty() {
        return Err("A2: service_version is empty".to_string());
    }
    if !first.supported_api_versions.iter().any(|v| v == "v1") {
        return Err(format!(
            "A2: supported_api_versions {:?} does not include v1",
            first.supported_api_versions
        ));
    }

    // Other traffic must not change the identity.
    executor
        .execute_atomic_node_run(fixtures::execute_request(
            "a02",
            fixtures::ECHO_NODE_TYPE,
            serde_json::json!({}),
        ))
        .await;

    let second = executor.version(VersionRequest).await;
    if first != second {
        return Err(format!(
            "A2: version changed between calls: {:?} vs {:?}",
            first, second
        ));
    }
    Ok(())
}

/// A2: Version equals the identity the executor was configured with.
pub async fn test_a02_version_matches<E: AtomicExecutorApi>(
    executor: &E,
    expected: &VersionInfo,
) -> Result<(), String> {
    test_a02_version_stable(executor).await?;
    let actual = executor.version(VersionRequest).await;
    if &actual != expected {
        return Err(format!(
            "A2: version {:?} does not match configured identity {:?}",
            actual, expected
        ));
    }
    Ok(())
}
