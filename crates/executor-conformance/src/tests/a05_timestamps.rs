//! A5: Timestamp ordering obligation.
//!
//! Every result MUST satisfy `started_at <= ended_at`, whether it
//! succeeded or failed.

use atomic_executor_core::AtomicExecutorApi;
use serde_json::json;

use crate::fixtures;

/// A5: `started_at <= ended_at` across succeeded and failed runs.
pub async fn test_a05_timestamps_ordered<E: AtomicExecutorApi>(
    executor: &E,
) -> Result<(), String> {
    let node_types = [fixtures::ECHO_NODE_TYPE, "bogus.type"];
    for node_type_id in node_types {
        for i in 0..5 {
            let result = executor
                .execute_atomic_node_run(fixtures::execute_request(
                    &format!("a05_{}", i),
                    node_type_id,
                    json!({ "i": i }),
                ))
                .await;
            if result.started_at > result.ended_at {
                return Err(format!(
                    "A5: {} run {} started at {} but ended at {}",
                    node_type_id, i, result.started_at, result.ended_at
                ));
            }
        }
    }
    Ok(())
}
