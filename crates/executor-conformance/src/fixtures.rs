//! Request fixtures for the conformance suite.

use atomic_executor_model::{
    AtomicExecuteRequest, ExecuteAtomicNodeRunRequest, Inputs, NodeTypeRef,
};
use serde_json::{json, Value};

/// The one node type every conforming executor must register.
pub const ECHO_NODE_TYPE: &str = "atomic.echo";

/// Build an execute request for `node_type_id` with the given JSON object
/// as inputs. Non-object values yield empty inputs.
pub fn execute_request(
    node_run_id: &str,
    node_type_id: &str,
    inputs: Value,
) -> ExecuteAtomicNodeRunRequest {
    ExecuteAtomicNodeRunRequest {
        body: AtomicExecuteRequest {
            node_run_id: node_run_id.to_string(),
            run_id: "conformance_run".to_string(),
            node_type_ref: NodeTypeRef {
                node_type_id: node_type_id.to_string(),
                version: Some("0.1.0".to_string()),
            },
            inputs: as_inputs(inputs),
        },
    }
}

pub fn as_inputs(value: Value) -> Inputs {
    match value {
        Value::Object(map) => map,
        _ => Inputs::new(),
    }
}

/// A spread of input shapes: empty, flat, nested, arrays, nulls, unicode.
pub fn sample_inputs() -> Vec<Value> {
    vec![
        json!({}),
        json!({ "ping": "pong" }),
        json!({ "n": 42, "pi": 3.5, "flag": true, "nothing": null }),
        json!({ "list": [1, "two", { "three": 3 }], "nested": { "a": { "b": { "c": [] } } } }),
        json!({ "echo": "shadowed key", "ключ": "значение", "": "empty key" }),
    ]
}

/// Node-type ids no conforming executor registers.
pub fn unknown_node_type_ids() -> Vec<&'static str> {
    vec!["bogus.type", "", "atomic.echo.v2", "ATOMIC.ECHO", " atomic.echo"]
}
