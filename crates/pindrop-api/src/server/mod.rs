//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use pindrop_cache::RedisPool;
use pindrop_common::{AppConfig, AppError, JwtService};
use pindrop_db::{
    create_pool, run_migrations, DatabaseConfig, PgReportRepository, PgUserRepository,
    PgVoteStore,
};
use pindrop_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(create_router(), &config.api, &config.cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(format!("migration failed: {e}")))?;
    }

    // The pool connects on first use; readiness reports reachability
    let redis_pool = RedisPool::from_config(&config.redis)
        .map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis pool created");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .redis_pool(redis_pool)
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .report_repo(Arc::new(PgReportRepository::new(pool.clone())))
        .vote_store(Arc::new(PgVoteStore::new(pool)))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
