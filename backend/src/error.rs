//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.
//!
//! Every 401 carries a `WWW-Authenticate: Bearer` header. Internal error
//! detail is only exposed outside production.

use crate::config::AppConfig;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Missing, malformed, or expired token, or the referenced user is
    /// missing/inactive
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Login failure; deliberately identical for unknown email and wrong
    /// password
    #[error("Email ou senha incorretos")]
    InvalidCredentials,

    /// Email already registered (pre-check or unique constraint at commit)
    #[error("Email já cadastrado no sistema")]
    DuplicateEmail,

    /// Active-user re-check failed on an already-resolved user
    #[error("Usuário inativo")]
    InactiveUser,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized(_) | ApiError::InvalidCredentials
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let bearer_challenge = self.is_unauthenticated();

        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                self.to_string(),
            ),
            ApiError::DuplicateEmail => {
                (StatusCode::BAD_REQUEST, "DUPLICATE_EMAIL", self.to_string())
            }
            ApiError::InactiveUser => (StatusCode::BAD_REQUEST, "INACTIVE_USER", self.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                let message = if AppConfig::is_production() {
                    "An internal error occurred".to_string()
                } else {
                    format!("An internal error occurred: {}", err)
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                let message = if AppConfig::is_production() {
                    "A database error occurred".to_string()
                } else {
                    format!("A database error occurred: {}", err)
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", message)
            }
        };

        let body = Json(ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        let mut response = (status, body).into_response();
        if bearer_challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_email_is_bad_request() {
        let response = ApiError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let error = ApiError::Unauthorized("Token inválido ou expirado".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_invalid_credentials_carries_bearer_challenge() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Configurações não encontradas".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[test]
    fn test_inactive_user_is_bad_request() {
        let response = ApiError::InactiveUser.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
