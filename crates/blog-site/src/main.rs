//! Technical blog website server.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blog_site::config::SiteConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "blog_site=debug,tower_http=debug"
                .parse()
                .expect("valid filter")
        }))
        .with(fmt::layer())
        .init();

    let config = SiteConfig::from_env()?;

    tracing::info!("Starting technical blog server");

    blog_site::run(config).await
}
