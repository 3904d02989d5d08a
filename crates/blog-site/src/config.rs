//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the listen host.
pub const HOST_VAR: &str = "BLOG_SITE_HOST";
/// Environment variable overriding the listen port.
pub const PORT_VAR: &str = "BLOG_SITE_PORT";
/// Environment variable overriding the static asset directory.
pub const STATIC_DIR_VAR: &str = "BLOG_SITE_STATIC_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen host {value:?}: {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid listen port {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Site server configuration, validated at construction.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl SiteConfig {
    /// Reads configuration from the environment, with defaults for anything
    /// unset. Malformed values are errors rather than silent fallbacks.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(HOST_VAR).ok().as_deref(),
            std::env::var(PORT_VAR).ok().as_deref(),
            std::env::var(STATIC_DIR_VAR).ok().as_deref(),
        )
    }

    fn from_vars(
        host: Option<&str>,
        port: Option<&str>,
        static_dir: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = host {
            config.host = value.parse().map_err(|source| ConfigError::InvalidHost {
                value: value.to_owned(),
                source,
            })?;
        }
        if let Some(value) = port {
            config.port = value.parse().map_err(|source| ConfigError::InvalidPort {
                value: value.to_owned(),
                source,
            })?;
        }
        if let Some(value) = static_dir {
            config.static_dir = PathBuf::from(value);
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
