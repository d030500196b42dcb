//! User settings routes
//!
//! Every user has exactly one settings row, created at registration.
//! These endpoints read and patch it; there is no create or delete.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{UpdateUserSettings, UserRepository, UserSettingsRecord};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use finance_manager_shared::types::{SettingsResponse, UpdateSettingsRequest};
use finance_manager_shared::validation;

/// Create settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

fn to_response(record: UserSettingsRecord) -> SettingsResponse {
    SettingsResponse {
        id: record.id,
        usuario_id: record.user_id,
        moeda: record.currency.parse().unwrap_or_default(),
        formato_data: record.date_format,
        tema: record.theme.parse().unwrap_or_default(),
        notificacoes_email: record.email_notifications,
        notificacoes_push: record.push_notifications,
        dia_fechamento_mes: record.month_close_day,
    }
}

/// GET /api/v1/configuracoes - Get the authenticated user's settings
async fn get_settings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = UserRepository::get_settings(state.db(), user.0.id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Configurações não encontradas".to_string()))?;

    Ok(Json(to_response(settings)))
}

/// PUT /api/v1/configuracoes - Update the authenticated user's settings
///
/// Absent fields are left unchanged.
async fn update_settings(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    if let Some(day) = req.dia_fechamento_mes {
        validation::validate_closing_day(day).map_err(ApiError::Validation)?;
    }

    let updates = UpdateUserSettings {
        currency: req.moeda.map(|c| c.code().to_string()),
        date_format: req.formato_data,
        theme: req.tema.map(|t| t.as_str().to_string()),
        email_notifications: req.notificacoes_email,
        push_notifications: req.notificacoes_push,
        month_close_day: req.dia_fechamento_mes,
    };

    let settings = UserRepository::update_settings(state.db(), user.0.id, updates)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Configurações não encontradas".to_string()))?;

    Ok(Json(to_response(settings)))
}
