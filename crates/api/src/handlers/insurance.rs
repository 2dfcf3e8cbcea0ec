//! Handlers for insurance policies.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::models::insurance::{CreatePolicy, UpdatePolicy};
use nova_db::repositories::InsuranceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default lookahead for the expiring-policies report.
const DEFAULT_EXPIRING_DAYS: i64 = 30;

/// Query parameters for `GET /insurance/expiring`.
#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    pub within_days: Option<i64>,
}

/// GET /insurance
pub async fn list_policies(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = InsuranceRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /insurance/expiring?within_days=N
pub async fn list_expiring_policies(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ExpiringParams>,
) -> AppResult<impl IntoResponse> {
    let within = params.within_days.unwrap_or(DEFAULT_EXPIRING_DAYS);
    if within < 0 {
        return Err(AppError::BadRequest("within_days must be non-negative".into()));
    }
    let items = InsuranceRepo::list_expiring(&state.pool, user.tenant_id, within).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /insurance
pub async fn create_policy(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreatePolicy>,
) -> AppResult<impl IntoResponse> {
    if input.expires_at <= input.starts_at {
        return Err(AppError::BadRequest(
            "expires_at must be after starts_at".into(),
        ));
    }

    let policy = InsuranceRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "policy.created", "insurance_policy", policy.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: policy })))
}

/// GET /insurance/{id}
pub async fn get_policy(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let policy = InsuranceRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "insurance policy",
            id,
        }))?;
    Ok(Json(DataResponse { data: policy }))
}

/// PUT /insurance/{id}
pub async fn update_policy(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePolicy>,
) -> AppResult<impl IntoResponse> {
    let policy = InsuranceRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "insurance policy",
            id,
        }))?;
    log_activity(&state, user.tenant_id, user.user_id, "policy.updated", "insurance_policy", id)
        .await;
    Ok(Json(DataResponse { data: policy }))
}

/// DELETE /insurance/{id}
pub async fn delete_policy(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = InsuranceRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "insurance policy",
            id,
        }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "policy.deleted", "insurance_policy", id)
        .await;
    Ok(StatusCode::NO_CONTENT)
}
