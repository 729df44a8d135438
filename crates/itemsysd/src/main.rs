//! itemsysd - Item-System API Gateway daemon
//!
//! REST front door for the user and item backend services.
//!
//! Usage:
//!   itemsysd [config.toml]
//!
//! If no config file is provided, defaults are used: port 8080, user
//! service on 127.0.0.1:50051, item service on 127.0.0.1:50052.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use itemsys_api::{create_router, AppState, DEFAULT_CALL_TIMEOUT};
use itemsys_rpc::{ItemServiceClient, UserServiceClient};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command-line arguments
struct Args {
    /// Gateway config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut result = Args { config_path: None };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(other.to_string());
            }
            other => {
                tracing::warn!("Unknown argument: {}", other);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"itemsysd - Item-System API Gateway daemon

Usage: itemsysd [OPTIONS] [config.toml]

Options:
  -h, --help    Print this help message

Examples:
  # Run with defaults (port 8080, backends on 50051/50052)
  itemsysd

  # Run with a config file
  itemsysd config.toml
"#
    );
}

/// Gateway runtime configuration
struct GatewayConfig {
    /// Inbound HTTP port
    port: u16,
    /// User service endpoint
    user_service: String,
    /// Item service endpoint
    item_service: String,
    /// Per-request backend call timeout
    call_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            user_service: "http://127.0.0.1:50051".to_string(),
            item_service: "http://127.0.0.1:50052".to_string(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

/// Load configuration from a TOML file, falling back to defaults for any
/// missing key.
fn load_config_file(path: &str) -> anyhow::Result<GatewayConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: toml::Value = toml::from_str(&content)?;
    let defaults = GatewayConfig::default();

    let port = config
        .get("server")
        .and_then(|s| s.get("port"))
        .and_then(|p| p.as_integer())
        .unwrap_or(defaults.port as i64) as u16;

    let user_service = config
        .get("backend")
        .and_then(|b| b.get("users"))
        .and_then(|u| u.get("url"))
        .and_then(|u| u.as_str())
        .unwrap_or(&defaults.user_service)
        .to_string();

    let item_service = config
        .get("backend")
        .and_then(|b| b.get("items"))
        .and_then(|i| i.get("url"))
        .and_then(|i| i.as_str())
        .unwrap_or(&defaults.item_service)
        .to_string();

    let call_timeout = config
        .get("gateway")
        .and_then(|g| g.get("call_timeout_ms"))
        .and_then(|t| t.as_integer())
        .map(|ms| Duration::from_millis(ms as u64))
        .unwrap_or(defaults.call_timeout);

    Ok(GatewayConfig {
        port,
        user_service,
        item_service,
        call_timeout,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemsysd=info,itemsys_api=info,itemsys_rpc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting itemsysd (Item-System API Gateway)");

    let args = parse_args();

    let config = match args.config_path {
        Some(ref path) => {
            tracing::info!("Loading config from: {}", path);
            load_config_file(path)?
        }
        None => {
            tracing::info!("No config file provided, using defaults");
            GatewayConfig::default()
        }
    };

    // Backend channels are lazy: an unreachable backend fails its calls,
    // not the gateway process.
    let users = UserServiceClient::connect(&config.user_service)?;
    let items = ItemServiceClient::connect(&config.item_service)?;

    // Shutdown cancels in-flight backend calls along with the listener.
    let shutdown = CancellationToken::new();

    let state = AppState::new(Arc::new(users), Arc::new(items))
        .with_call_timeout(config.call_timeout)
        .with_shutdown_token(shutdown.clone());

    // Create the router
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
