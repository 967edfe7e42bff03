//! Serve command - run the website server.

use std::{net::Ipv4Addr, path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use sarathi_core::Config;
use tokio::net::TcpListener;

use crate::server::{AppState, create_router};

/// Run the serve command.
///
/// A port given on the command line wins over the configured one.
pub async fn run(config_path: &Path, port: Option<u16>) -> Result<()> {
    let config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let port = port.unwrap_or(config.server.port);

    tracing::info!(
        port,
        cms_configured = config.is_cms_configured(),
        "starting server"
    );

    let state = Arc::new(AppState::new(config));
    let router = create_router(state);

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .wrap_err_with(|| format!("Failed to bind port {port}"))?;

    println!("Serving on http://localhost:{port}");
    axum::serve(listener, router).await?;

    Ok(())
}
