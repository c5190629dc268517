//! # flueview — furnace status monitor
//!
//! Composition root that wires the adapters together and runs the poller.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging (stderr, so the repainted screen owns stdout)
//! - Construct the HTTP status source and the terminal screen
//! - Run the poll schedule until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use flueview_adapter_http_reqwest::{HttpStatusSource, Url};
use flueview_adapter_terminal::AnsiScreen;
use flueview_app::poller::Poller;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let endpoint: Url = config.monitor.endpoint.parse()?;
    let source = HttpStatusSource::new(endpoint);
    let display = AnsiScreen::stdout();
    let poller = Arc::new(Poller::new(source, display));

    tracing::info!(
        endpoint = %config.monitor.endpoint,
        period_ms = config.monitor.poll_interval_ms,
        "flueview starting"
    );

    tokio::select! {
        () = Arc::clone(&poller).run(config.poll_interval()) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }

    Ok(())
}
