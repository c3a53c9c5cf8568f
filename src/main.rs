//! Stock data relay.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser ──▶ /api/stock-data ─┐
//!             ──▶ /api/quote ──────┼──▶ provider client ──▶ Twelve Data REST API
//!             ──▶ /api/health      │        (API key, 10s timeout)
//!             ──▶ /* static files  │
//!                                  ▼
//!                     verbatim JSON or {"error": "..."}
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use stock_relay::config::load_config;
use stock_relay::lifecycle::{signals, Shutdown};
use stock_relay::observability::{logging, metrics};
use stock_relay::HttpServer;

#[derive(Parser)]
#[command(name = "stock-relay")]
#[command(about = "Relay for Twelve Data time series and quotes", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overriding the config file and PORT.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.listener.set_port(port);
    }

    logging::init_logging(&config.observability);

    tracing::info!("stock-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        provider = %config.provider.base_url,
        timeout_ms = config.provider.timeout_ms,
        api_key_configured = config.provider.api_key().is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
