pub mod config;
pub mod error;
pub mod types;

pub use config::ServerConfig;
pub use error::Error;
pub use types::{ErrorBody, Health, Welcome};
