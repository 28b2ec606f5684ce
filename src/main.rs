// transgate - provider-agnostic machine translation gateway
// Author: kelexine (https://github.com/kelexine)

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use transgate::cli::Args;
use transgate::config::AppConfig;
use transgate::gateway::Gateway;
use transgate::providers::{http, ProviderRegistry};
use transgate::server::create_router;
use transgate::utils::logging;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load_from(args.config.as_deref())?;
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting transgate v{}", env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers.max(1))
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(run(args, config))
}

async fn run(args: Args, config: AppConfig) -> Result<()> {
    // Phase 3: Build the shared HTTP client and provider registry
    let client = http::build_client(&config.gateway, &config.performance)?;
    let registry = ProviderRegistry::from_config(&config.providers, client);

    if args.list_providers {
        for provider in registry.available() {
            println!("{:<10} available", provider);
        }
        for (provider, reason) in registry.unavailable() {
            println!("{:<10} unavailable: {}", provider, reason);
        }
        return Ok(());
    }

    if registry.is_empty() {
        bail!("no translation provider is configured; set credentials under [providers.*]");
    }
    for (provider, reason) in registry.unavailable() {
        warn!("{} disabled: {}", provider, reason);
    }

    let gateway = Gateway::from_config(Arc::new(registry), &config.gateway);
    info!(
        "Gateway ready (timeout {}s, max retries {})",
        config.gateway.timeout_seconds, config.gateway.max_retries
    );

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server.host / server.port")?;
    let app = create_router(config, gateway);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
