// ABOUTME: Server binary for the Stride Fitness API
// ABOUTME: Loads configuration, initializes logging and serves the HTTP router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Stride Fitness API Server Binary
//!
//! Starts the HTTP service: workout plan selection, AI plan generation and
//! daily habit check-in tracking.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use stride_server::{config::ServerConfig, logging, resources::ServerResources, routes};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

#[derive(Parser)]
#[command(name = "stride-server")]
#[command(about = "Stride Fitness API - workout plans and daily habit tracking")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Stride Fitness API");
    info!("{}", config.summary());

    let addr = format!("{}:{}", config.host, config.http_port);
    let resources = Arc::new(ServerResources::new(config));

    let app = routes::router(resources)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(90)));

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
