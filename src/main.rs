// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use humanize_detector_node::{
    api::{start_server, AppState},
    detection::DetectorClient,
    version,
};
use std::{env, net::SocketAddr, sync::Arc, time::Duration};

/// Humanize AI detector node
#[derive(Parser, Debug)]
#[command(name = "humanize-detector-node")]
#[command(about = "HTTP facade for the Humanize AI text detector", long_about = None)]
struct Args {
    /// Address to bind the API server to
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port for the API server
    #[arg(long, env = "API_PORT", default_value_t = 8080)]
    port: u16,

    /// Base URL of the detector sidecar
    #[arg(long, env = "DETECTOR_ENDPOINT", default_value = "http://127.0.0.1:8500")]
    detector_endpoint: String,

    /// Request timeout for detector sidecar calls, in seconds
    #[arg(long, env = "DETECTOR_TIMEOUT_SECS", default_value_t = 120)]
    detector_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    println!("🚀 Starting Humanize AI Server (Detector only)...\n");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!();

    let detector = DetectorClient::new(
        &args.detector_endpoint,
        Duration::from_secs(args.detector_timeout_secs),
    )?;

    if detector.health_check().await {
        tracing::info!("✅ Detector sidecar reachable at {}", detector.endpoint());
    } else {
        tracing::warn!(
            "⚠️  Detector sidecar not reachable at {}; detection requests will fail until it comes up",
            detector.endpoint()
        );
    }

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let state = AppState::new(Arc::new(detector));

    start_server(addr, state).await
}
