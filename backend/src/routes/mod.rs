//! Route definitions for the Finance Manager API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod accounts;
mod auth;
mod budgets;
mod categories;
mod goals;
mod health;
mod settings;
mod transactions;

#[cfg(test)]
mod auth_tests;

pub use accounts::account_routes;
pub use auth::auth_routes;
pub use budgets::budget_routes;
pub use categories::category_routes;
pub use goals::goal_routes;
pub use settings::settings_routes;
pub use transactions::transaction_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS from the configured origin allowlist; an empty list allows any
/// origin (development convenience)
fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config()
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Financial Management API v1" }))
        .nest("/auth", auth::auth_routes())
        .nest("/configuracoes", settings::settings_routes())
        .nest("/categorias", categories::category_routes())
        .nest("/contas", accounts::account_routes())
        .nest("/transacoes", transactions::transaction_routes())
        .nest("/orcamentos", budgets::budget_routes())
        .nest("/metas", goals::goal_routes())
}
