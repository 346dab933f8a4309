//! MCP Server Entry Point
//!
//! This is the main entry point for the Fathom MCP server. It initializes
//! logging from `MCP_LOG_LEVEL`, then loads the rest of the configuration
//! and starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fathom_mcp_server::core::{Config, McpServer, TransportService};
use fathom_mcp_server::core::config::LoggingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first so configuration warnings are not lost
    init_logging(&LoggingConfig::from_env());

    // Load configuration from environment
    let config = Config::from_env();

    config.validate()?;

    if config.transport.is_stdio() && config.fathom.api_key.is_none() {
        warn!("FATHOM_API_KEY not set - tool calls over STDIO will fail until a key is configured");
    }

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server
    let server = McpServer::new(config.clone());

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the stdio transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
