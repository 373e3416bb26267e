//! ASB HTTP Server Binary
//!
//! This is the main entry point for the Auto Schedule Builder REST API
//! server. It loads the configuration and the catalogue data file, sets up
//! the HTTP router, and starts serving requests. A missing or malformed
//! catalogue is fatal: the process exits before binding the listener.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin asb-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: from asb.toml, then 0.0.0.0)
//! - `PORT`: Server port (default: from asb.toml, then 8080)
//! - `ASB_CATALOGUE`: Catalogue data file (default: from asb.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use asb_rust::catalogue::Catalogue;
use asb_rust::config::ServerConfig;
use asb_rust::http::{create_router, AppState};

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

    info!("Starting ASB HTTP Server");

    let config = ServerConfig::from_default_location()?;

    // Load the catalogue once; serving with a partial catalogue is never
    // an option, so any load error aborts startup.
    let data_file = env::var("ASB_CATALOGUE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config.catalogue.data_file.clone());
    let catalogue = Catalogue::load(&data_file)?;
    info!(
        "catalogue ready: {} courses, {} sections, checksum {}",
        catalogue.course_count(),
        catalogue.section_count(),
        catalogue.checksum()
    );

    // Create application state and router
    let state = AppState::new(Arc::new(catalogue), config.limits);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
