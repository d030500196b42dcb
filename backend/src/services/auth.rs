//! Authentication service: registration (onboarding) and login
//!
//! Registration validates everything before any write, then delegates the
//! atomic user + settings + default-categories insert to the repository.
//! The email pre-check is an optimization; the unique constraint caught at
//! commit time is the authority under concurrent registration.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserRecord, UserRepository};
use finance_manager_shared::types::{RegisterRequest, TokenResponse, UserProfile};
use finance_manager_shared::validation;
use sqlx::PgPool;
use validator::ValidateEmail;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user with default settings and seed categories.
    ///
    /// All-or-nothing: a caller never observes a user without its settings
    /// and categories, nor settings/categories without a user.
    pub async fn register(pool: &PgPool, req: RegisterRequest) -> Result<UserProfile, ApiError> {
        if !req.email.validate_email() {
            return Err(ApiError::Validation("Email inválido".to_string()));
        }
        validation::validate_name(&req.primeiro_nome).map_err(ApiError::Validation)?;
        validation::validate_name(&req.ultimo_nome).map_err(ApiError::Validation)?;
        if let Some(telefone) = &req.telefone {
            validation::validate_phone(telefone).map_err(ApiError::Validation)?;
        }
        validation::validate_password(&req.senha).map_err(ApiError::Validation)?;
        if req.senha != req.confirmar_senha {
            return Err(ApiError::Validation("As senhas não coincidem".to_string()));
        }

        // Pre-check; races are caught by the unique constraint below
        if UserRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::DuplicateEmail);
        }

        // Hash on the blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.senha)
            .await
            .map_err(ApiError::Internal)?;

        let input = NewUser {
            email: req.email,
            password_hash,
            first_name: req.primeiro_nome,
            last_name: req.ultimo_nome,
            phone: req.telefone,
        };

        let user = UserRepository::create_with_defaults(pool, input)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    ApiError::DuplicateEmail
                } else {
                    ApiError::Internal(err)
                }
            })?;

        Ok(Self::profile(&user))
    }

    /// Login with email and password.
    ///
    /// Unknown email and wrong password fail identically; nothing reveals
    /// which check failed.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        senha: &str,
    ) -> Result<TokenResponse, ApiError> {
        let user = UserRepository::find_by_email_active(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::InvalidCredentials)?;

        // Verify on the blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(senha.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let access_token = jwt_service.issue(user.id).map_err(ApiError::Internal)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: jwt_service.expiry_secs(),
            usuario: Self::profile(&user),
        })
    }

    /// Map a stored record to the public profile (never exposes the hash)
    pub fn profile(user: &UserRecord) -> UserProfile {
        UserProfile {
            id: user.id,
            email: user.email.clone(),
            primeiro_nome: user.first_name.clone(),
            ultimo_nome: user.last_name.clone(),
            telefone: user.phone.clone(),
            ativo: user.ativo,
            criado_em: user.created_at,
            atualizado_em: user.updated_at,
        }
    }
}

/// Whether an error chain bottoms out in a database unique violation
fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}
