use atomic_executor_core::AtomicExecutor;

use crate::config::Settings;
use crate::OutputFormat;

pub(crate) fn cmd_node_types(settings: &Settings, output: OutputFormat) {
    let executor = AtomicExecutor::new(settings.executor.clone());
    let ids: Vec<&str> = executor.registry().node_type_ids().collect();
    match output {
        OutputFormat::Json => println!("{}", serde_json::json!({ "node_types": ids })),
        OutputFormat::Text => {
            for id in ids {
                println!("{}", id);
            }
        }
    }
}

pub(crate) fn cmd_version(settings: &Settings, output: OutputFormat) {
    let identity = settings.executor.identity();
    match output {
        OutputFormat::Json => println!("{}", serde_json::json!(identity)),
        OutputFormat::Text => println!(
            "{} {} (api: {})",
            identity.service_name,
            identity.service_version,
            identity.supported_api_versions.join(", ")
        ),
    }
}
