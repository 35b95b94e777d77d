//! Bybit Balance Gateway - Main Entry Point

use anyhow::{Context, Result};
use bybit_balance_gateway::api::create_router;
use bybit_balance_gateway::config::Config;
use bybit_balance_gateway::state::AppState;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bybit Balance Gateway CLI
#[derive(Parser)]
#[command(name = "bybit-balance-gateway")]
#[command(version, about = "Signed wallet-balance gateway for Bybit subaccounts")]
struct Cli {
    /// Config file base name (without extension)
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load_from(&cli.config)?;
    config.validate()?;

    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    let state = Arc::new(AppState::from_config(&config)?);
    info!(
        subaccounts = config.subaccounts.len(),
        proxy = config.bybit.proxy_url.is_some(),
        "Gateway configured"
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
