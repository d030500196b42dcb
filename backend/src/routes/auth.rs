//! Authentication routes
//!
//! Provides endpoints for user registration, login, the authenticated
//! profile, and stateless logout.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use finance_manager_shared::types::{
    LoginRequest, MessageResponse, RegisterRequest, TokenResponse, UserProfile,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registrar", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
}

/// Register a new user with default settings and seed categories
///
/// POST /api/v1/auth/registrar
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let profile = AuthService::register(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = AuthService::login(&state.db, state.jwt(), &req.email, &req.senha).await?;
    Ok(Json(token))
}

/// Get the authenticated user's profile
///
/// GET /api/v1/auth/me
///
/// Requires a valid Bearer token in the Authorization header.
async fn me(user: CurrentUser) -> ApiResult<Json<UserProfile>> {
    Ok(Json(AuthService::profile(&user.0)))
}

/// Stateless logout
///
/// POST /api/v1/auth/logout
///
/// Tokens are not tracked server-side; clients discard theirs. The token
/// remains technically valid until it expires.
async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logout realizado com sucesso".to_string(),
    })
}

#[cfg(test)]
mod tests {
    // Route-level coverage lives in routes/auth_tests.rs and the
    // integration suites under tests/
}
