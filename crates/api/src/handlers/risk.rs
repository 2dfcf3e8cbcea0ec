//! Handlers for risk assessments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::risk::risk_score;
use nova_core::types::DbId;
use nova_db::models::risk::{CreateRisk, UpdateRisk};
use nova_db::repositories::RiskRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /risks
pub async fn list_risks(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = RiskRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /risks
///
/// The matrix score is computed server-side from the submitted axes.
pub async fn create_risk(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateRisk>,
) -> AppResult<impl IntoResponse> {
    let score = risk_score(input.probability, input.consequence)?;
    let risk = RiskRepo::create(&state.pool, user.tenant_id, &input, score).await?;
    log_activity(&state, user.tenant_id, user.user_id, "risk.created", "risk", risk.id).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: risk })))
}

/// GET /risks/{id}
pub async fn get_risk(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let risk = RiskRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "risk", id }))?;
    Ok(Json(DataResponse { data: risk }))
}

/// PUT /risks/{id}
///
/// The score is recomputed from the effective axis values (submitted or
/// stored).
pub async fn update_risk(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRisk>,
) -> AppResult<impl IntoResponse> {
    let existing = RiskRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "risk", id }))?;

    let probability = input.probability.unwrap_or(existing.probability);
    let consequence = input.consequence.unwrap_or(existing.consequence);
    let score = risk_score(probability, consequence)?;

    let risk = RiskRepo::update(&state.pool, user.tenant_id, id, &input, score)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "risk", id }))?;
    log_activity(&state, user.tenant_id, user.user_id, "risk.updated", "risk", id).await;
    Ok(Json(DataResponse { data: risk }))
}

/// DELETE /risks/{id}
pub async fn delete_risk(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RiskRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "risk", id }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "risk.deleted", "risk", id).await;
    Ok(StatusCode::NO_CONTENT)
}
