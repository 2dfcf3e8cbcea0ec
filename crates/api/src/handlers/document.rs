//! Handlers for the controlled-documents register.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::models::document::{CreateDocument, UpdateDocument};
use nova_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /documents
pub async fn list_documents(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = DocumentRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /documents
pub async fn create_document(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateDocument>,
) -> AppResult<impl IntoResponse> {
    let document = DocumentRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "document.created", "document", document.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// GET /documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let document = DocumentRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "document",
            id,
        }))?;
    Ok(Json(DataResponse { data: document }))
}

/// PUT /documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<impl IntoResponse> {
    let document = DocumentRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "document",
            id,
        }))?;
    log_activity(&state, user.tenant_id, user.user_id, "document.updated", "document", id).await;
    Ok(Json(DataResponse { data: document }))
}

/// DELETE /documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DocumentRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "document",
            id,
        }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "document.deleted", "document", id).await;
    Ok(StatusCode::NO_CONTENT)
}
