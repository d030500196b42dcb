//! Financial goal API routes
//!
//! Responses carry derived progress (remaining amount, percent achieved,
//! days remaining, required monthly contribution). The current date enters
//! only here; the derivations themselves are pure.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{CreateGoal, GoalRecord, GoalRepository, UpdateGoal};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use finance_manager_shared::finance::GoalSnapshot;
use finance_manager_shared::models::GoalKind;
use finance_manager_shared::types::{CreateGoalRequest, GoalResponse, UpdateGoalRequest};
use finance_manager_shared::validation;
use uuid::Uuid;

/// Create financial goal routes
pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id", axum::routing::put(update_goal).delete(delete_goal))
}

fn to_response(record: GoalRecord) -> GoalResponse {
    let today = Utc::now().date_naive();
    let snapshot = GoalSnapshot {
        target_amount: record.target_amount,
        current_amount: record.current_amount,
        target_date: record.target_date,
    };
    GoalResponse {
        id: record.id,
        nome: record.name,
        descricao: record.description,
        valor_objetivo: record.target_amount,
        valor_atual: record.current_amount,
        valor_restante: snapshot.remaining_amount(),
        percentual_atingido: snapshot.percent_achieved(),
        dias_restantes: snapshot.days_remaining(today),
        valor_mensal_necessario: snapshot.required_monthly_amount(today),
        tipo_meta: record.kind.parse().unwrap_or(GoalKind::Economia),
        status: record.status.parse().unwrap_or_default(),
        data_inicio: record.start_date,
        data_objetivo: record.target_date,
        criado_em: record.created_at,
        atualizado_em: record.updated_at,
    }
}

/// GET /api/v1/metas - List the user's goals
async fn list_goals(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let records = GoalRepository::list(state.db(), user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(to_response).collect()))
}

/// POST /api/v1/metas - Create a goal
async fn create_goal(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateGoalRequest>,
) -> ApiResult<(StatusCode, Json<GoalResponse>)> {
    validation::validate_name(&req.nome).map_err(ApiError::Validation)?;
    validation::validate_positive_amount(req.valor_objetivo).map_err(ApiError::Validation)?;
    if req.data_objetivo < req.data_inicio {
        return Err(ApiError::Validation(
            "Data objetivo deve ser posterior à data inicial".to_string(),
        ));
    }

    let input = CreateGoal {
        user_id: user.0.id,
        name: req.nome,
        description: req.descricao,
        target_amount: req.valor_objetivo,
        kind: req.tipo_meta.as_str().to_string(),
        start_date: req.data_inicio,
        target_date: req.data_objetivo,
    };

    let record = GoalRepository::create(state.db(), input)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// PUT /api/v1/metas/{id} - Update a goal
async fn update_goal(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGoalRequest>,
) -> ApiResult<Json<GoalResponse>> {
    if let Some(valor) = req.valor_objetivo {
        validation::validate_positive_amount(valor).map_err(ApiError::Validation)?;
    }
    if let Some(valor) = req.valor_atual {
        validation::validate_non_negative_amount(valor).map_err(ApiError::Validation)?;
    }

    let updates = UpdateGoal {
        name: req.nome,
        description: req.descricao,
        target_amount: req.valor_objetivo,
        current_amount: req.valor_atual,
        target_date: req.data_objetivo,
        status: req.status.map(|s| s.as_str().to_string()),
    };

    let record = GoalRepository::update(state.db(), id, user.0.id, updates)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Meta não encontrada".to_string()))?;

    Ok(Json(to_response(record)))
}

/// DELETE /api/v1/metas/{id} - Delete a goal
async fn delete_goal(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let removed = GoalRepository::delete(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    if !removed {
        return Err(ApiError::NotFound("Meta não encontrada".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
