use std::io::Read;
use std::path::Path;
use std::process;

use atomic_executor_core::{AtomicExecutor, AtomicExecutorApi};
use atomic_executor_model::{AtomicExecuteRequest, AtomicExecuteResult, ExecuteAtomicNodeRunRequest};

use crate::config::Settings;
use crate::{report_error, OutputFormat};

/// Run one request to completion and print the result. Exits 1 when the
/// request cannot be read or the node run failed.
pub(crate) fn cmd_execute(request: &Path, settings: &Settings, output: OutputFormat, quiet: bool) {
    let source = match read_request(request) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading '{}': {}", request.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    let body: AtomicExecuteRequest = match serde_json::from_str(&source) {
        Ok(b) => b,
        Err(e) => {
            let msg = format!("error parsing request in '{}': {}", request.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            report_error(&format!("failed to create tokio runtime: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let executor = AtomicExecutor::new(settings.executor.clone());
    let result = rt.block_on(executor.execute_atomic_node_run(ExecuteAtomicNodeRunRequest { body }));

    print_result(&result, output);
    if !result.is_succeeded() {
        process::exit(1);
    }
}

fn read_request(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn print_result(result: &AtomicExecuteResult, output: OutputFormat) {
    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error serializing result: {}", e),
        },
        OutputFormat::Text => match (&result.outputs, &result.error) {
            (Some(outputs), _) => {
                println!("{}: succeeded", result.node_run_id);
                let rendered = serde_json::to_string_pretty(outputs)
                    .unwrap_or_else(|_| format!("{:?}", outputs));
                println!("{}", rendered);
            }
            (None, Some(error)) => {
                println!("{}: failed", result.node_run_id);
                println!("{}: {}", error.code, error.message);
            }
            (None, None) => println!("{}: {:?}", result.node_run_id, result.state),
        },
    }
}
