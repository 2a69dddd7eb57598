//! Service configuration.
//!
//! The listening address and the reflection toggle are the only knobs. Values
//! come from the environment; anything unset falls back to the defaults below.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CONSIGNMENT_HOST` | `0.0.0.0` |
//! | `CONSIGNMENT_PORT` | `50051` |
//! | `CONSIGNMENT_REFLECTION` | `true` |

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default gRPC port.
pub const DEFAULT_PORT: u16 = 50051;

/// Main service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 50051)
    pub port: u16,
    /// Register the gRPC reflection service for tooling
    pub reflection: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            reflection: true,
        }
    }
}

impl ServiceConfig {
    /// Loopback address with an OS-assigned port.
    pub fn ephemeral() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            reflection: true,
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("CONSIGNMENT_HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }

        if let Some(port) = lookup("CONSIGNMENT_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(flag) = lookup("CONSIGNMENT_REFLECTION") {
            config.reflection = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidFlag {
                var: "CONSIGNMENT_REFLECTION",
                value: flag.clone(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for the standalone binary.
    ///
    /// Port 0 is rejected here: it would make the service listen on a random
    /// port that clients cannot discover. Tests that want an OS-assigned port
    /// use [`ServiceConfig::ephemeral`] and skip this check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        Ok(())
    }

    /// Get the gRPC server bind address
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Port is not a valid u16
    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    /// Port 0 requested outside of tests
    #[error("port must be non-zero")]
    ZeroPort,

    /// Host is not an IP address
    #[error("invalid host address: {0:?}")]
    InvalidHost(String),

    /// Boolean variable holds something other than true/false
    #[error("invalid value for {var}: {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}
