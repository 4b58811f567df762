//! Serve command
//!
//! Usage: paddock serve [--host <HOST>] [--port <PORT>] [--db <PATH>]

use clap::Args;
use paddock_api::{open_state, AppConfig};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overriding `server.port`
    #[arg(long)]
    pub port: Option<u16>,
}

/// Execute serve command
pub async fn execute(args: ServeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!(db = %config.database.path.display(), "Opening database");
    let state = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || open_state(&config)).await??
    };

    paddock_api::serve(&config.server, state).await?;
    Ok(())
}
