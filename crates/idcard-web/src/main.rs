//! Resident ID card validator web service.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use idcard_web::app;

#[derive(Parser)]
#[command(
    name = "idcard-web",
    version,
    about = "Resident ID card validator - HTTP service"
)]
struct Cli {
    /// Address to bind the HTTP listener on.
    #[arg(long = "bind", value_name = "ADDR", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("bind {}", cli.bind))?;
    info!(addr = %cli.bind, "listening");
    axum::serve(listener, app()).await.context("serve")?;
    Ok(())
}
