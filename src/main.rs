//! Remote HR API MCP server.
//!
//! Serves the Remote API tools over stdio by default, or as a streamable HTTP
//! service at `/mcp` when `--http` is given. Logs always go to stderr since
//! stdout carries the protocol in stdio mode.

use anyhow::{Result, anyhow};
use axum::{Router, serve};
use clap::Parser;
use dotenv::dotenv;
use remote_hr_mcp::{RemoteMcpServer, ToolkitOptions, config::parse_allowed_tools};
use rmcp::{
    ServiceExt,
    transport::{
        StreamableHttpServerConfig, StreamableHttpService,
        streamable_http_server::session::local::LocalSessionManager,
    },
};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// MCP server for the Remote HR API
#[derive(Parser)]
#[command(name = "remote-hr-mcp")]
#[command(version, about)]
struct Args {
    /// Remote API key; `ra_test_` keys target the sandbox
    #[arg(long, env = "REMOTE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "REMOTE_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Comma separated display names of the tools to expose
    #[arg(long, env = "REMOTE_ALLOWED_TOOLS")]
    tools: Option<String>,

    /// Serve streamable HTTP on this address instead of stdio
    #[arg(long, env = "REMOTE_MCP_HTTP_BIND")]
    http: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "REMOTE_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remote_hr_mcp=info".to_string().into()),
        )
        .with(
            args.log_json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with((!args.log_json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();

    let api_key = args
        .api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| anyhow!("API key is required: pass --api-key or set REMOTE_API_KEY"))?;

    let mut options = ToolkitOptions::new(api_key);
    if let Some(base_url) = args.api_base_url {
        options = options.with_base_url(base_url);
    }
    if let Some(raw) = args.tools.as_deref() {
        options = options.with_allowed_tools(parse_allowed_tools(raw));
    }
    let server = RemoteMcpServer::new(options)?;

    match args.http {
        Some(bind_address) => serve_http(server, &bind_address).await,
        None => {
            info!("Serving MCP over stdio");
            let service = server.serve(rmcp::transport::stdio()).await?;
            service.waiting().await?;
            Ok(())
        }
    }
}

async fn serve_http(server: RemoteMcpServer, bind_address: &str) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    info!("Starting server on {bind_address}");
    let router = Router::new().nest_service("/mcp", service);
    let tcp_listener = TcpListener::bind(bind_address).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            eprintln!("failed to install CTRL+C handler: {e}");
        });
    };

    serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
