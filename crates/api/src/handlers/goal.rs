//! Handlers for EHS goals.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::models::goal::{CreateGoal, UpdateGoal};
use nova_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /goals
pub async fn list_goals(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = GoalRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /goals
pub async fn create_goal(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateGoal>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "goal.created", "goal", goal.id).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// GET /goals/{id}
pub async fn get_goal(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "goal", id }))?;
    Ok(Json(DataResponse { data: goal }))
}

/// PUT /goals/{id}
pub async fn update_goal(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoal>,
) -> AppResult<impl IntoResponse> {
    if let Some(progress) = input.progress_percent {
        if !(0..=100).contains(&progress) {
            return Err(AppError::BadRequest(
                "progress_percent must be between 0 and 100".into(),
            ));
        }
    }

    let goal = GoalRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "goal", id }))?;
    log_activity(&state, user.tenant_id, user.user_id, "goal.updated", "goal", id).await;
    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /goals/{id}
pub async fn delete_goal(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GoalRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "goal", id }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "goal.deleted", "goal", id).await;
    Ok(StatusCode::NO_CONTENT)
}
