//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use axum::Router;
use folio_common::{AppConfig, AppError, JwtService};
use folio_db::{create_pool, run_migrations, DatabaseConfig, PgPool};
use folio_service::{MediaStore, ServiceContext};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes, media_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes are merged after the middleware so they skip rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let media_root = state.service_context().media().root().to_path_buf();

    let router = create_router(config.storage.max_upload_bytes).merge(media_routes(&media_root));
    let router = apply_middleware(
        router,
        &config.rate_limit,
        &config.cors,
        config.server.mode.is_release(),
    );

    router.merge(health_routes()).with_state(state)
}

/// Wire repositories, services and storage around an existing pool
pub fn create_app_state_with_pool(config: AppConfig, pool: PgPool) -> AppState {
    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.expiration_hours);
    let media = MediaStore::from_config(&config.storage, &config.server);
    let service_context = ServiceContext::from_pool(pool.clone(), jwt_service, media);

    AppState::new(service_context, pool, config)
}

/// Connect to PostgreSQL, apply migrations if enabled, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.auto_migrate {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
    }

    tokio::fs::create_dir_all(&config.storage.root)
        .await
        .map_err(|e| AppError::Storage(format!("Cannot create {}: {e}", config.storage.root)))?;

    Ok(create_app_state_with_pool(config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
