//! Leafbook Analysis HTTP Server Binary
//!
//! Entry point for the watering-schedule analysis REST API. It loads the
//! analyzer policy from the environment, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin leafbook-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `LEAFBOOK_MIN_EVENTS`: minimum events before inference (default: 5)
//! - `LEAFBOOK_SIGNIFICANT_DIFFERENCE_DAYS`: suggestion threshold (default: 2)
//! - `LEAFBOOK_MAX_INTERVAL_DAYS`: routine-gap cap in days (default: 90)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use leafbook_analysis::config::AnalysisConfig;
use leafbook_analysis::http::{create_router, AppState};

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
        .init();

    info!("Starting Leafbook analysis server");

    let config = AnalysisConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Analyzer policy: min_events={}, significant_difference={}d, interval band=[{}, {}]d",
        config.policy.min_events_required,
        config.policy.significant_difference_days,
        config.policy.min_interval_days,
        config.policy.max_interval_days
    );

    // Create application state and router
    let state = AppState::new(config.policy.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
