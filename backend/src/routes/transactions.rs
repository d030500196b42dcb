//! Transaction API routes
//!
//! Listing supports date-range and kind filters with pagination
//! (limit default 50, max 100), newest first.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{
    CreateTransaction, TransactionFilter, TransactionRecord, TransactionRepository,
    UpdateTransaction,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finance_manager_shared::models::{TransactionKind, TransactionStatus};
use finance_manager_shared::types::{
    CreateTransactionRequest, TransactionListQuery, TransactionListResponse, TransactionResponse,
    UpdateTransactionRequest,
};
use finance_manager_shared::validation;
use uuid::Uuid;

/// Create transaction routes
pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route(
            "/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

fn to_response(record: TransactionRecord) -> TransactionResponse {
    TransactionResponse {
        id: record.id,
        descricao: record.description,
        valor: record.amount,
        tipo_transacao: record.kind.parse().unwrap_or(TransactionKind::Despesa),
        data_transacao: record.occurred_on,
        data_vencimento: record.due_date,
        categoria_id: record.category_id,
        conta_bancaria_id: record.bank_account_id,
        cartao_credito_id: record.credit_card_id,
        emprestimo_id: record.loan_id,
        eh_recorrente: record.is_recurring,
        frequencia_recorrencia: record.recurrence_frequency,
        data_fim_recorrencia: record.recurrence_end_date,
        status: record.status.parse().unwrap_or_default(),
        observacoes: record.notes,
        etiquetas: record.tags.unwrap_or_default(),
        criado_em: record.created_at,
        atualizado_em: record.updated_at,
    }
}

/// GET /api/v1/transacoes - List transactions with filters and pagination
async fn list_transactions(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<TransactionListQuery>,
) -> ApiResult<Json<TransactionListResponse>> {
    let query = query.normalize();
    let filter = TransactionFilter {
        start: query.inicio,
        end: query.fim,
        kind: query.tipo.map(|k| k.as_str().to_string()),
    };

    let (records, total_count) = TransactionRepository::list_paginated(
        state.db(),
        user.0.id,
        &filter,
        query.limit,
        query.offset,
    )
    .await
    .map_err(ApiError::Internal)?;

    let items: Vec<TransactionResponse> = records.into_iter().map(to_response).collect();
    let has_more = query.offset + (items.len() as i64) < total_count;

    Ok(Json(TransactionListResponse {
        items,
        total_count,
        limit: query.limit,
        offset: query.offset,
        has_more,
    }))
}

/// POST /api/v1/transacoes - Create a transaction
async fn create_transaction(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    if req.descricao.trim().is_empty() {
        return Err(ApiError::Validation(
            "Descrição não pode ser vazia".to_string(),
        ));
    }
    validation::validate_positive_amount(req.valor).map_err(ApiError::Validation)?;

    let input = CreateTransaction {
        user_id: user.0.id,
        category_id: req.categoria_id,
        bank_account_id: req.conta_bancaria_id,
        credit_card_id: req.cartao_credito_id,
        loan_id: req.emprestimo_id,
        description: req.descricao,
        amount: req.valor,
        kind: req.tipo_transacao.as_str().to_string(),
        occurred_on: req.data_transacao,
        due_date: req.data_vencimento,
        is_recurring: req.eh_recorrente,
        recurrence_frequency: req.frequencia_recorrencia,
        recurrence_end_date: req.data_fim_recorrencia,
        status: req
            .status
            .unwrap_or(TransactionStatus::Concluida)
            .as_str()
            .to_string(),
        notes: req.observacoes,
        tags: req.etiquetas,
    };

    let record = TransactionRepository::create(state.db(), input)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// GET /api/v1/transacoes/{id} - Get one transaction
async fn get_transaction(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TransactionResponse>> {
    let record = TransactionRepository::get_by_id(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Transação não encontrada".to_string()))?;

    Ok(Json(to_response(record)))
}

/// PUT /api/v1/transacoes/{id} - Update a transaction
async fn update_transaction(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    if let Some(valor) = req.valor {
        validation::validate_positive_amount(valor).map_err(ApiError::Validation)?;
    }

    let updates = UpdateTransaction {
        description: req.descricao,
        amount: req.valor,
        occurred_on: req.data_transacao,
        due_date: req.data_vencimento,
        category_id: req.categoria_id,
        status: req.status.map(|s| s.as_str().to_string()),
        notes: req.observacoes,
    };

    let record = TransactionRepository::update(state.db(), id, user.0.id, updates)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Transação não encontrada".to_string()))?;

    Ok(Json(to_response(record)))
}

/// DELETE /api/v1/transacoes/{id} - Delete a transaction
async fn delete_transaction(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let removed = TransactionRepository::delete(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    if !removed {
        return Err(ApiError::NotFound("Transação não encontrada".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
