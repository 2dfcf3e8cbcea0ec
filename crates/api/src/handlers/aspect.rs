//! Handlers for the environmental aspect register.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::aspects::significance;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::models::aspect::{CreateAspect, UpdateAspect};
use nova_db::repositories::AspectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /aspects
pub async fn list_aspects(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = AspectRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /aspects
///
/// Significance is computed server-side from severity, frequency, and the
/// regulatory-requirement flag.
pub async fn create_aspect(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateAspect>,
) -> AppResult<impl IntoResponse> {
    let sig = significance(input.severity, input.frequency, input.regulatory_requirement)?;
    let aspect = AspectRepo::create(&state.pool, user.tenant_id, &input, sig).await?;
    log_activity(&state, user.tenant_id, user.user_id, "aspect.created", "aspect", aspect.id).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: aspect })))
}

/// GET /aspects/{id}
pub async fn get_aspect(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let aspect = AspectRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "environmental aspect",
            id,
        }))?;
    Ok(Json(DataResponse { data: aspect }))
}

/// PUT /aspects/{id}
///
/// Significance is recomputed from the effective values (submitted or
/// stored).
pub async fn update_aspect(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAspect>,
) -> AppResult<impl IntoResponse> {
    let existing = AspectRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "environmental aspect",
            id,
        }))?;

    let severity = input.severity.unwrap_or(existing.severity);
    let frequency = input.frequency.unwrap_or(existing.frequency);
    let regulatory = input
        .regulatory_requirement
        .unwrap_or(existing.regulatory_requirement);
    let sig = significance(severity, frequency, regulatory)?;

    let aspect = AspectRepo::update(&state.pool, user.tenant_id, id, &input, sig)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "environmental aspect",
            id,
        }))?;
    log_activity(&state, user.tenant_id, user.user_id, "aspect.updated", "aspect", id).await;
    Ok(Json(DataResponse { data: aspect }))
}

/// DELETE /aspects/{id}
pub async fn delete_aspect(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AspectRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "environmental aspect",
            id,
        }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "aspect.deleted", "aspect", id).await;
    Ok(StatusCode::NO_CONTENT)
}
