//! Current-user resolution
//!
//! The `CurrentUser` extractor turns an inbound bearer token into the
//! authenticated, active user record for that request only:
//! header → token verification → active-user lookup. Any failure is a 401
//! with a `WWW-Authenticate: Bearer` challenge. No session state is kept
//! between requests.

use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Authenticated, active user resolved from the request's bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserRecord);

impl CurrentUser {
    /// Re-check the active flag on the already-resolved record.
    ///
    /// The resolver only yields active users, so this cannot fail through
    /// the extractor path; it guards call sites holding a record from
    /// elsewhere.
    pub fn ensure_active(&self) -> Result<&UserRecord, ApiError> {
        if !self.0.ativo {
            return Err(ApiError::InactiveUser);
        }
        Ok(&self.0)
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        // Verification fails closed; every failure mode is the same 401
        let user_id = app_state
            .jwt()
            .verify(token)
            .ok_or_else(|| ApiError::Unauthorized("Token inválido ou expirado".to_string()))?;

        // Lookup filtered on the active flag: a deactivated user's live
        // token stops resolving immediately
        let user = UserRepository::find_active_by_id(app_state.db(), user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::Unauthorized("Usuário não encontrado ou inativo".to_string())
            })?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_record(ativo: bool) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            phone: None,
            ativo,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_ensure_active_passes_for_active_user() {
        let user = CurrentUser(test_record(true));
        assert!(user.ensure_active().is_ok());
    }

    #[test]
    fn test_ensure_active_rejects_inactive_user() {
        let user = CurrentUser(test_record(false));
        assert!(matches!(
            user.ensure_active(),
            Err(ApiError::InactiveUser)
        ));
    }
}
