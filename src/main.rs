//! Animelist Gateway
//!
//! A small HTTP gateway built with Tokio and Axum that adapts the
//! MyAnimeList legacy XML list endpoint into a single JSON endpoint.
//!
//! ```text
//!     Client Request                 ┌──────────────────────────────┐
//!     GET /animelist?user=<name> ───▶│  http server (axum)          │
//!                                    │      │                       │
//!                                    │      ▼                       │
//!                                    │  mal client ─── one GET ─────┼──▶ malappinfo.php
//!                                    │      │                       │     (XML document)
//!                                    │      ▼                       │
//!                                    │  watchlist pipeline          │
//!                                    │  (filter → sort → map)       │
//!     JSON array of series  ◀────────│      │                       │
//!                                    └──────┴───────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animelist_gateway::config::{load_config, AppConfig};
use animelist_gateway::lifecycle::{signals, Shutdown};
use animelist_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "animelist-gateway")]
#[command(about = "HTTP gateway for a user's currently-watching anime list", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing subscriber; RUST_LOG overrides the configured level.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "animelist_gateway={},tower_http=info",
                    config.observability.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Trigger graceful shutdown on SIGINT/SIGTERM
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
