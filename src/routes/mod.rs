use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;

use crate::handlers::{create_admin, health_check, list_admins};

/// Create API router
pub fn create_router(pool: PgPool) -> Router {
    // Health check route (outside /api)
    let health_routes = Router::new()
        .route("/health", get(health_check));

    // Versioned API routes
    let api_routes = Router::new()
        .route("/users", post(create_admin))
        .route("/admins", get(list_admins));

    // Combine routes
    Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_routes)
        .with_state(pool)
}
