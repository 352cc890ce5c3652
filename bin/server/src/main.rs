//! Process entry point: configuration, wiring, and the HTTP listener.

use std::sync::Arc;

use ordocliens_admin_auth::AuthService;
use ordocliens_admin_session::{SessionConfig, SessionStore};
use ordocliens_admin_upstream::UpstreamClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing SESSION_SECRET fails here, before anything listens.
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let session_config = SessionConfig::new(config.session_secrets())
        .expect("invalid session configuration")
        .with_secure(config.secure_cookies);
    let sessions = SessionStore::new(session_config);

    let upstream =
        UpstreamClient::new(&config.upstream).expect("failed to build upstream client");
    tracing::info!(base_url = %config.upstream.base_url, "Using identity API");

    let auth = AuthService::new(Arc::new(upstream), sessions);
    let app = routes::router(Arc::new(AppState::new(auth)));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutting down");
}
