//! Category API routes
//!
//! Categories are soft-deleted so existing transactions keep their
//! reference; listings only show active ones.

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{CategoryRecord, CategoryRepository, CreateCategory, UpdateCategory};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finance_manager_shared::models::CategoryKind;
use finance_manager_shared::types::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use finance_manager_shared::validation;
use uuid::Uuid;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", axum::routing::put(update_category).delete(delete_category))
}

fn to_response(record: CategoryRecord) -> CategoryResponse {
    CategoryResponse {
        id: record.id,
        nome: record.name,
        descricao: record.description,
        tipo: record.kind.parse().unwrap_or(CategoryKind::Despesa),
        cor: record.color,
        icone: record.icon,
        ativo: record.ativo,
        criado_em: record.created_at,
        atualizado_em: record.updated_at,
    }
}

/// GET /api/v1/categorias - List the user's active categories
async fn list_categories(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let records = CategoryRepository::list_active(state.db(), user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(to_response).collect()))
}

/// POST /api/v1/categorias - Create a category
async fn create_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    validation::validate_name(&req.nome).map_err(ApiError::Validation)?;
    if let Some(cor) = &req.cor {
        validation::validate_hex_color(cor).map_err(ApiError::Validation)?;
    }

    let input = CreateCategory {
        user_id: user.0.id,
        name: req.nome,
        description: req.descricao,
        kind: req.tipo.as_str().to_string(),
        color: req.cor,
        icon: req.icone,
    };

    let record = CategoryRepository::create(state.db(), input)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// PUT /api/v1/categorias/{id} - Update a category
async fn update_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    if let Some(nome) = &req.nome {
        validation::validate_name(nome).map_err(ApiError::Validation)?;
    }
    if let Some(cor) = &req.cor {
        validation::validate_hex_color(cor).map_err(ApiError::Validation)?;
    }

    let updates = UpdateCategory {
        name: req.nome,
        description: req.descricao,
        color: req.cor,
        icon: req.icone,
    };

    let record = CategoryRepository::update(state.db(), id, user.0.id, updates)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Categoria não encontrada".to_string()))?;

    Ok(Json(to_response(record)))
}

/// DELETE /api/v1/categorias/{id} - Soft-delete a category
async fn delete_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let removed = CategoryRepository::deactivate(state.db(), id, user.0.id)
        .await
        .map_err(ApiError::Internal)?;

    if !removed {
        return Err(ApiError::NotFound("Categoria não encontrada".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
