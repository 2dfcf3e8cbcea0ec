//! Handlers for training records.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::models::training::{CreateTraining, UpdateTraining};
use nova_db::repositories::TrainingRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default lookahead for the expiring-trainings report.
const DEFAULT_EXPIRING_DAYS: i64 = 30;

/// Query parameters for `GET /trainings/expiring`.
#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    pub within_days: Option<i64>,
}

/// GET /trainings
pub async fn list_trainings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = TrainingRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /trainings/expiring?within_days=N
pub async fn list_expiring_trainings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ExpiringParams>,
) -> AppResult<impl IntoResponse> {
    let within = params.within_days.unwrap_or(DEFAULT_EXPIRING_DAYS);
    if within < 0 {
        return Err(AppError::BadRequest("within_days must be non-negative".into()));
    }
    let items = TrainingRepo::list_expiring(&state.pool, user.tenant_id, within).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /trainings
pub async fn create_training(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateTraining>,
) -> AppResult<impl IntoResponse> {
    let training = TrainingRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "training.created", "training", training.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: training })))
}

/// GET /trainings/{id}
pub async fn get_training(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let training = TrainingRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "training",
            id,
        }))?;
    Ok(Json(DataResponse { data: training }))
}

/// PUT /trainings/{id}
pub async fn update_training(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTraining>,
) -> AppResult<impl IntoResponse> {
    let training = TrainingRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "training",
            id,
        }))?;
    log_activity(&state, user.tenant_id, user.user_id, "training.updated", "training", id).await;
    Ok(Json(DataResponse { data: training }))
}

/// DELETE /trainings/{id}
pub async fn delete_training(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TrainingRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "training",
            id,
        }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "training.deleted", "training", id).await;
    Ok(StatusCode::NO_CONTENT)
}
