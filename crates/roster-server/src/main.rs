use std::net::SocketAddr;

use clap::Parser;
use roster_server::{ServerError, router};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster-server", version, about = "Serve the roster collections over HTTP")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|err| ServerError::Logging(err.to_string()))?;

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    tracing::info!(event = "server_started", addr = %listener.local_addr()?);

    axum::serve(listener, router()).await?;
    Ok(())
}
