//! The `pantheon serve` command.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use pantheon_server::AppState;

pub async fn execute(host: Option<String>, port: Option<u16>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address: {host}:{port}"))?;

    let engine = super::build_engine(&config)?;
    pantheon_server::serve(addr, AppState::new(engine)).await
}
