use std::net::SocketAddr;
use std::num::ParseIntError;

/// Core error type for the DevMatch server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
