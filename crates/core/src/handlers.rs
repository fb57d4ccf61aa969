//! Built-in node handlers.

use atomic_executor_model::{Inputs, Outputs};

use crate::error::HandlerError;

/// `atomic.echo`: wraps the inputs unchanged under the `echo` key.
pub fn echo(inputs: &Inputs) -> Result<Outputs, HandlerError> {
    let mut outputs = Outputs::new();
    outputs.insert(
        "echo".to_string(),
        serde_json::Value::Object(inputs.clone()),
    );
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_echo_wraps_inputs() {
        let inputs = json!({ "ping": "pong", "n": [1, 2, 3] });
        let outputs = echo(inputs.as_object().unwrap()).unwrap();
        assert_eq!(
            serde_json::Value::Object(outputs),
            json!({ "echo": { "ping": "pong", "n": [1, 2, 3] } })
        );
    }

    #[test]
    fn test_echo_empty_inputs() {
        let outputs = echo(&Inputs::new()).unwrap();
        assert_eq!(serde_json::Value::Object(outputs), json!({ "echo": {} }));
    }
}
