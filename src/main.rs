//! HTTP server for the payroll engine.
//!
//! Environment:
//! - `PAYROLL_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `PAYROLL_CONFIG`: roster directory served at `GET /payroll` (default `./config/demo`)
//! - `RUST_LOG`: log filter (default `info`)

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CONFIG_DIR: &str = "./config/demo";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let bind_addr =
        std::env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let config_dir =
        std::env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let state = match ConfigLoader::load(&config_dir) {
        Ok(loader) => {
            info!(
                config_dir = %config_dir,
                company = %loader.metadata().company,
                period = %loader.config().period_label(),
                employees = loader.config().employees().len(),
                "Roster loaded"
            );
            AppState::new(loader)
        }
        Err(err) => {
            warn!(config_dir = %config_dir, error = %err, "Roster not loaded; GET /payroll disabled");
            AppState::without_roster()
        }
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, create_router(state))
        .await
        .context("server error")?;

    Ok(())
}
