// Standalone MCP server binary

use anyhow::{Context, Result};
use propertydata_mcp::config::ServerConfig;
use propertydata_mcp::server::McpServer;
use propertydata_mcp::tools::property_registry;
use propertydata_sdk::PropertyDataClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries protocol frames, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("PropertyData MCP Server starting...");

    let client = PropertyDataClient::builder()
        .api_key(config.api_key)
        .build()
        .context("Failed to create PropertyData client")?;

    let registry = property_registry(Arc::new(client));
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
