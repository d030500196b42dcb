//! Budget API routes
//!
//! Responses carry the derived spend figures (available amount, percent
//! spent, four-state status) computed from the stored snapshot.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{BudgetRecord, BudgetRepository, CreateBudget, UpdateBudget};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finance_manager_shared::finance::BudgetSnapshot;
use finance_manager_shared::models::BudgetPeriod;
use finance_manager_shared::types::{BudgetResponse, CreateBudgetRequest, UpdateBudgetRequest};
use finance_manager_shared::validation;
use uuid::Uuid;

/// Create budget routes
pub fn budget_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_budgets).post(create_budget))
        .route("/:id", axum::routing::put(update_budget).delete(delete_budget))
}

fn to_response(record: BudgetRecord) -> BudgetResponse {
    let snapshot = BudgetSnapshot {
        limit_amount: record.limit_amount,
        spent_amount: record.spent_amount,
    };
    BudgetResponse {
        id: record.id,
        nome: record.name,
        categoria_id: record.category_id,
        valor_limite: record.limit_amount,
        valor_gasto: record.spent_amount,
        valor_disponivel: snapshot.available_amount(),
        percentual_gasto: snapshot.percent_spent(),
        status_orcamento: snapshot.status(),
        tipo_periodo: record.period.parse().unwrap_or(BudgetPeriod::Mensal),
        data_inicio: record.start_date,
        data_fim: record.end_date,
        ativo: record.ativo,
        criado_em: record.created_at,
        atualizado_em: record.updated_at,
    }
}

/// GET /api/v1/orcamentos - List the user's active budgets
async fn list_budgets(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<BudgetResponse>>> {
    let records = BudgetRepository::list_active(state.db(), user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(to_response).collect()))
}

/// POST /api/v1/orcamentos - Create a budget
async fn create_budget(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<BudgetResponse>)> {
    validation::validate_name(&req.nome).map_err(ApiError::Validation)?;
    validation::validate_positive_amount(req.valor_limite).map_err(ApiError::Validation)?;
    if req.data_fim < req.data_inicio {
        return Err(ApiError::Validation(
            "Data final deve ser posterior à data inicial".to_string(),
        ));
    }

    let input = CreateBudget {
        user_id: user.0.id,
        category_id: req.categoria_id,
        name: req.nome,
        limit_amount: req.valor_limite,
        period: req.tipo_periodo.as_str().to_string(),
        start_date: req.data_inicio,
        end_date: req.data_fim,
    };

    let record = BudgetRepository::create(state.db(), input)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// PUT /api/v1/orcamentos/{id} - Update a budget
async fn update_budget(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    if let Some(valor) = req.valor_limite {
        validation::validate_positive_amount(valor).map_err(ApiError::Validation)?;
    }
    if let Some(valor) = req.valor_gasto {
        validation::validate_non_negative_amount(valor).map_err(ApiError::Validation)?;
    }

    let updates = UpdateBudget {
        name: req.nome,
        limit_amount: req.valor_limite,
        spent_amount: req.valor_gasto,
        start_date: req.data_inicio,
        end_date: req.data_fim,
    };

    let record = BudgetRepository::update(state.db(), id, user.0.id, updates)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Orçamento não encontrado".to_string()))?;

    Ok(Json(to_response(record)))
}

/// DELETE /api/v1/orcamentos/{id} - Soft-delete a budget
async fn delete_budget(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let removed = BudgetRepository::deactivate(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    if !removed {
        return Err(ApiError::NotFound("Orçamento não encontrado".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
