//! Handlers for workers' compensation claims.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::models::claim::{CreateClaim, UpdateClaim};
use nova_db::repositories::ClaimRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /claims
pub async fn list_claims(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = ClaimRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /claims
pub async fn create_claim(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateClaim>,
) -> AppResult<impl IntoResponse> {
    if let Some(amount) = input.amount_cents {
        if amount < 0 {
            return Err(AppError::BadRequest("amount_cents must be non-negative".into()));
        }
    }

    let claim = ClaimRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "claim.created", "claim", claim.id).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: claim })))
}

/// GET /claims/{id}
pub async fn get_claim(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claim = ClaimRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "claim", id }))?;
    Ok(Json(DataResponse { data: claim }))
}

/// PUT /claims/{id}
pub async fn update_claim(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClaim>,
) -> AppResult<impl IntoResponse> {
    if let Some(amount) = input.amount_cents {
        if amount < 0 {
            return Err(AppError::BadRequest("amount_cents must be non-negative".into()));
        }
    }

    let claim = ClaimRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "claim", id }))?;
    log_activity(&state, user.tenant_id, user.user_id, "claim.updated", "claim", id).await;
    Ok(Json(DataResponse { data: claim }))
}

/// DELETE /claims/{id}
pub async fn delete_claim(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ClaimRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "claim", id }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "claim.deleted", "claim", id).await;
    Ok(StatusCode::NO_CONTENT)
}
