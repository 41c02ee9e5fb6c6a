mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use namkaran_engine::{Engine, EngineConfig};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(namkaran_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let corpus = namkaran_core::load_configured_corpus(&config)?;
    tracing::info!(
        env = %config.env,
        partitions = corpus.partitions().len(),
        result_size_mode = %config.result_size_mode,
        localization = %config.localization,
        "name corpus ready"
    );
    let engine = Engine::new(Arc::new(corpus), EngineConfig::from_app_config(&config));

    let rate_limit = RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    );
    let app = build_app(
        AppState {
            engine: Arc::new(engine),
        },
        rate_limit,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
