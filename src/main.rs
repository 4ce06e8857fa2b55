// SPDX-License-Identifier: AGPL-3.0-or-later

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use realstate_server::api::router;
use realstate_server::config::Config;
use realstate_server::state::{AppState, AuthConfig};
use realstate_server::storage::{DocumentStore, StorePaths};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("configuration error: {message}");
            std::process::exit(1);
        }
    };

    let mut store = DocumentStore::new(StorePaths::new(&config.data_dir));
    store
        .initialize()
        .expect("Failed to initialize document store");
    tracing::info!(data_dir = %config.data_dir, "document store ready");

    let state = AppState::new(
        store,
        AuthConfig::new(config.token_secret.clone(), config.token_ttl_secs),
    );
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!("Realstate server listening on http://{addr} (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

/// Structured logging: `LOG_FORMAT=json` for machine output, pretty otherwise.
/// Level filtering follows `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
