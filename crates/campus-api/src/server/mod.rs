//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use campus_common::{AppConfig, AppError};
use campus_core::SnowflakeGenerator;
use campus_db::{
    create_pool, init_schema, PgCommentRepository, PgMealRatingRepository, PgMessageRepository,
    PgReactionRepository, PgTopicRepository,
};
use campus_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Rate limiting covers the API surface; health probes stay unthrottled
    let api = apply_rate_limit(create_router(), &state.config().rate_limit);
    let router = health_routes().merge(api);
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = campus_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    init_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let meal_rating_repo = Arc::new(PgMealRatingRepository::new(pool.clone()));
    let topic_repo = Arc::new(PgTopicRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .message_repo(message_repo)
        .comment_repo(comment_repo)
        .reaction_repo(reaction_repo)
        .meal_rating_repo(meal_rating_repo)
        .topic_repo(topic_repo)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: String) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
