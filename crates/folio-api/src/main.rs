//! Folio API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p folio-api
//! ```
//!
//! Configuration is loaded from `.env`, an optional config file and the
//! environment.

use folio_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_mode(config.server.mode)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        mode = ?config.server.mode,
        address = %config.server.address(),
        "Starting Folio API server"
    );

    if let Err(e) = folio_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
