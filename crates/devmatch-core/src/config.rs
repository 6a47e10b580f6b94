use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::Error;

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Listener settings, resolved from the environment at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`, which maps a variable
    /// name to its value.
    ///
    /// A missing or blank `PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PORT_VAR) {
            let value = raw.trim();
            if !value.is_empty() {
                config.port = value.parse().map_err(|source| Error::InvalidPort {
                    value: value.to_string(),
                    source,
                })?;
            }
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
