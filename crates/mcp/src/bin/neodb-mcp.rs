// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use neodb_mcp::server::McpServer;
use neodb_mcp::tools::ToolRegistry;
use neodb_sdk::NeoDbClient;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "neodb-mcp")]
#[command(about = "MCP server exposing the NeoDB catalog API over stdio", long_about = None)]
struct Args {
    /// Base URL of the NeoDB instance, e.g. https://neodb.social
    #[arg(env = "NEODB_API_BASE")]
    api_base: String,

    /// Access token sent as a bearer credential
    #[arg(env = "NEODB_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Exits with usage on stderr when either positional is missing
    let args = Args::parse();

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

    tracing::info!("NeoDB MCP server starting...");

    let client = NeoDbClient::builder()
        .base_url(&args.api_base)
        .access_token(args.access_token)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .with_context(|| format!("Failed to configure NeoDB client for {}", args.api_base))?;

    tracing::info!(api_base = %client.config().base_url, "Using NeoDB instance");

    let registry = ToolRegistry::new(Arc::new(client));
    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
