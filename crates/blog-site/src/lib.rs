//! Personal technical blog server.
//!
//! Static and near-static pages composed from a typed component library and
//! served by an explicitly constructed router.

pub mod components;
pub mod config;
pub mod error;
pub mod fragment;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::SiteConfig;
use crate::router::create_router;
use crate::state::SiteState;

/// Build version for cache busting static assets.
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the site server until shutdown.
pub async fn run(config: SiteConfig) -> Result<()> {
    let state = SiteState::new(&config);
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    info!("Shutting down gracefully...");
}
