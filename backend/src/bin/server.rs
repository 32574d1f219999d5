//! Dashboard HTTP Server Binary
//!
//! Loads the launch dataset, sets up the HTTP router, and starts serving the
//! dashboard.
//!
//! # Usage
//!
//! ```bash
//! DATASET_PATH=spacex_launch_dash.csv cargo run --bin spacex-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `DATASET_PATH`: Launch records CSV (default: spacex_launch_dash.csv)
//! - `DASH_CONFIG`: Optional TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use spacex_dash::config::DashboardConfig;
use spacex_dash::http::{create_router, AppState};
use spacex_dash::io::load_dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SpaceX launch dashboard");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // A bad dataset is fatal: never serve charts built from garbage.
    let dataset = load_dataset(&config.data.csv_path)
        .with_context(|| format!("Failed to load dataset {}", config.data.csv_path.display()))?
        .into_shared();
    info!(
        "Dataset ready: {} records, sites: {}",
        dataset.len(),
        dataset.sites().join(", ")
    );

    let state = AppState::with_session_limits(dataset, config.sessions.limits());
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Dashboard listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
