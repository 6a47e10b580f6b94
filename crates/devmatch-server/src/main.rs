use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use devmatch_core::{Error, ServerConfig};
use devmatch_server::server::{shutdown_signal, Server};

/// Used when `RUST_LOG` is unset, so access logs show by default.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = ServerConfig::from_env()?;
    let server = Server::bind(&config).await?;

    tracing::info!("DevMatch API listening on {}", server.local_addr()?);

    server.run(shutdown_signal()).await
}
