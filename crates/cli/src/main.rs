mod commands;
mod config;
mod serve;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use atomic_executor_core::AtomicExecutor;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use self::commands::{cmd_execute, cmd_node_types, cmd_version};
use self::config::{Overrides, Settings};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Atomic node executor.
#[derive(Parser)]
#[command(name = "atomic-executor", version, about = "Atomic node executor")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to a TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the service name reported by version
    #[arg(long, global = true)]
    service_name: Option<String>,

    /// Override the service version reported by version
    #[arg(long, global = true)]
    service_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute one atomic node run from a request JSON file
    Execute {
        /// Path to the request JSON file, or `-` for stdin
        request: PathBuf,
    },

    /// List the registered node types
    NodeTypes,

    /// Print the service identity
    Version,
}

fn main() {
    let cli = Cli::parse();

    let (host, port) = match &cli.command {
        Commands::Serve { host, port } => (host.clone(), *port),
        _ => (None, None),
    };
    init_tracing(matches!(cli.command, Commands::Serve { .. }), cli.quiet);

    let overrides = Overrides {
        config_file: cli.config.clone(),
        service_name: cli.service_name.clone(),
        service_version: cli.service_version.clone(),
        host,
        port,
    };
    let settings = match config::resolve(&overrides) {
        Ok(s) => s,
        Err(e) => {
            report_error(&e.to_string(), cli.output, cli.quiet);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Serve { .. } => {
            cmd_serve(&settings, cli.output, cli.quiet);
        }
        Commands::Execute { request } => {
            cmd_execute(&request, &settings, cli.output, cli.quiet);
        }
        Commands::NodeTypes => {
            cmd_node_types(&settings, cli.output);
        }
        Commands::Version => {
            cmd_version(&settings, cli.output);
        }
    }
}

/// Install the global tracing subscriber. Logs go to stderr; `RUST_LOG`
/// overrides the default level.
fn init_tracing(serving: bool, quiet: bool) {
    let default_level = match (quiet, serving) {
        (true, _) => "error",
        (false, true) => "info",
        (false, false) => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_serve(settings: &Settings, output: OutputFormat, quiet: bool) {
    let executor = Arc::new(AtomicExecutor::new(settings.executor.clone()));
    tracing::info!(
        service_name = %settings.executor.service_name,
        service_version = %settings.executor.service_version,
        node_types = ?executor.registry().node_type_ids().collect::<Vec<_>>(),
        "starting atomic executor"
    );

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            report_error(&format!("failed to create tokio runtime: {}", e), output, quiet);
            process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(serve::start_server(
        &settings.server.host,
        settings.server.port,
        executor,
    )) {
        report_error(&format!("server error: {}", e), output, quiet);
        process::exit(1);
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
