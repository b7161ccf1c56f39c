use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::Result;
use log::{info, warn};

mod cli;

use cli::Cli;
use ytts::server::{self, AppState};
use ytts::youtube::InnerTubeProvider;

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Signal received, shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Load config file (non-fatal if missing/invalid); CLI flags take priority
    let config = ytts::config::Config::load().unwrap_or_default();

    let host = cli.host.or(config.host).unwrap_or_else(|| "0.0.0.0".to_string());
    let port = cli.port.or(config.port).unwrap_or(5000);
    let lang = cli.lang.or(config.default_lang).unwrap_or_else(|| "en".to_string());
    let timeout = cli.timeout.or(config.timeout_secs).unwrap_or(30);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()?;

    let state = AppState {
        provider: Arc::new(InnerTubeProvider::new(client)),
        lang,
    };

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, server::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
