use organizer_server::{
    app_state::{AppState, SharedState},
    data_access::{data_context::DataContext, memory_task_store::MemoryTaskStore, task_store::StoreError},
    map_routes,
    settings::{Settings, SettingsError},
};
use std::io;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot open task database: {0}")]
    Store(#[from] StoreError),
    #[error("cannot bind {address}: {source}")]
    Bind { address: String, source: io::Error },
    #[error("server error: {0}")]
    Serve(io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // ── Settings ───────────────────────────────────────────────
    let loaded = Settings::load()?;
    let missing = loaded.is_none();
    let settings = loaded.unwrap_or_default();

    init_tracing(&settings.log_filter);
    if missing {
        tracing::warn!("settings.json not found, using defaults");
    }

    // ── Store ──────────────────────────────────────────────────
    let state: SharedState = match settings.database_path.as_deref() {
        Some(path) => {
            let data_context = DataContext::new(path)?;
            tracing::info!(path, "task database opened");
            AppState::new(data_context)
        }
        None => {
            tracing::info!("no database_path configured, tasks are kept in memory");
            AppState::new(MemoryTaskStore::new())
        }
    };
    tracing::info!(tasks = state.tasks.count()?, "task store ready");

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state);

    // ── Start ──────────────────────────────────────────────────
    let address = settings.socket_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address: address.clone(), source })?;
    tracing::info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
