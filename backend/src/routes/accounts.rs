//! Bank account API routes
//!
//! Responses include the derived balance change so clients never compute
//! it themselves.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{AccountRecord, AccountRepository, CreateAccount, UpdateAccount};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finance_manager_shared::finance::AccountSnapshot;
use finance_manager_shared::models::AccountKind;
use finance_manager_shared::types::{AccountResponse, CreateAccountRequest, UpdateAccountRequest};
use finance_manager_shared::validation;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Create bank account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/:id",
            get(get_account)
                .put(update_account)
                .delete(delete_account),
        )
}

fn to_response(record: AccountRecord) -> AccountResponse {
    let snapshot = AccountSnapshot {
        balance: record.balance,
        initial_balance: record.initial_balance,
    };
    AccountResponse {
        id: record.id,
        nome: record.name,
        nome_banco: record.bank_name,
        tipo_conta: record.kind.parse().unwrap_or(AccountKind::Corrente),
        saldo: record.balance,
        saldo_inicial: record.initial_balance,
        variacao_saldo: snapshot.balance_change(),
        ativo: record.ativo,
        criado_em: record.created_at,
        atualizado_em: record.updated_at,
    }
}

/// GET /api/v1/contas - List the user's active accounts
async fn list_accounts(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let records = AccountRepository::list_active(state.db(), user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(to_response).collect()))
}

/// POST /api/v1/contas - Create an account
async fn create_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    validation::validate_name(&req.nome).map_err(ApiError::Validation)?;
    let initial_balance = req.saldo_inicial.unwrap_or(Decimal::ZERO);

    let input = CreateAccount {
        user_id: user.0.id,
        name: req.nome,
        bank_name: req.nome_banco,
        kind: req.tipo_conta.as_str().to_string(),
        initial_balance,
    };

    let record = AccountRepository::create(state.db(), input)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// GET /api/v1/contas/{id} - Get one account
async fn get_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<AccountResponse>> {
    let record = AccountRepository::get_by_id(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Conta não encontrada".to_string()))?;

    Ok(Json(to_response(record)))
}

/// PUT /api/v1/contas/{id} - Update an account
async fn update_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    if let Some(nome) = &req.nome {
        validation::validate_name(nome).map_err(ApiError::Validation)?;
    }

    let updates = UpdateAccount {
        name: req.nome,
        bank_name: req.nome_banco,
        kind: req.tipo_conta.map(|k| k.as_str().to_string()),
        balance: req.saldo,
    };

    let record = AccountRepository::update(state.db(), id, user.0.id, updates)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Conta não encontrada".to_string()))?;

    Ok(Json(to_response(record)))
}

/// DELETE /api/v1/contas/{id} - Soft-delete an account
async fn delete_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let removed = AccountRepository::deactivate(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    if !removed {
        return Err(ApiError::NotFound("Conta não encontrada".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
