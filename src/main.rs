//! `appsdk` entry point.
//!
//! Runs the server, or exports the App manifest and deployment settings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use context_coach_mcp::core::{Config, McpServer, TransportConfig, TransportService};
use context_coach_mcp::domains::manifest::{DEFAULT_MANIFEST_PATH, write_manifest};

#[derive(Debug, Parser)]
#[command(name = "appsdk", version, about = "Interact with the Simple Context Coach App")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the MCP server.
    RunServer {
        /// Interface for the HTTP server.
        #[arg(long)]
        host: Option<String>,

        /// Port for the HTTP server.
        #[arg(long)]
        port: Option<u16>,

        /// Transport to serve on: http or stdio.
        #[arg(long)]
        transport: Option<String>,
    },

    /// Write the App manifest that can be imported into ChatGPT.
    GenerateManifest {
        /// Where to write the manifest.
        #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
        output: PathBuf,
    },

    /// Build the deployment artifact and explain how to publish it.
    Deploy,

    /// Print the environment variables required by CI/CD.
    Env,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize logging
    init_logging(&config.logging.level);

    match cli.command {
        Command::RunServer {
            host,
            port,
            transport,
        } => run_server(config, host, port, transport).await,
        Command::GenerateManifest { output } => {
            let path = write_manifest(&output, &config.settings)?;
            println!("Wrote manifest to {}", path.display());
            Ok(())
        }
        Command::Deploy => {
            let path = write_manifest(Path::new(DEFAULT_MANIFEST_PATH), &config.settings)?;
            println!("Manifest ready: {}", path.display());
            println!("Upload the manifest via the ChatGPT UI by importing the generated file.");
            Ok(())
        }
        Command::Env => {
            println!("{}", config.settings.to_env_json()?);
            Ok(())
        }
    }
}

async fn run_server(
    config: Config,
    host: Option<String>,
    port: Option<u16>,
    transport: Option<String>,
) -> Result<()> {
    let mut config = config.with_bind(host, port);
    if let Some(name) = transport {
        config.transport = TransportConfig::by_name(&name, &config.settings);
    }

    info!("Starting {} v{}", config.settings.app_name, config.version);

    let server = McpServer::new(config.clone());
    info!("Server initialized with {} tools", server.list_tools().len());

    TransportService::new(config.transport).run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the STDIO transport keeps stdout to itself.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
