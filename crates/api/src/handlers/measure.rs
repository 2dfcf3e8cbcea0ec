//! Handlers for corrective measures.
//!
//! A measure's due date drives reminder fan-out, mirroring meetings and
//! audits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::reminders::ReminderKind;
use nova_core::status::MEASURE_DONE;
use nova_core::types::DbId;
use nova_db::models::measure::{CreateMeasure, UpdateMeasure};
use nova_db::repositories::MeasureRepo;
use nova_events::fanout;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /measures
pub async fn list_measures(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = MeasureRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /measures
pub async fn create_measure(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateMeasure>,
) -> AppResult<impl IntoResponse> {
    let measure = MeasureRepo::create(&state.pool, user.tenant_id, &input).await?;

    fanout::fan_out(
        &state.pool,
        user.tenant_id,
        ReminderKind::Measure,
        measure.id,
        measure.due_at,
    )
    .await?;

    log_activity(&state, user.tenant_id, user.user_id, "measure.created", "measure", measure.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: measure })))
}

/// GET /measures/{id}
pub async fn get_measure(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let measure = MeasureRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "measure",
            id,
        }))?;
    Ok(Json(DataResponse { data: measure }))
}

/// PUT /measures/{id}
///
/// A changed due date re-fans the reminders; completing the measure
/// cancels the pending ones.
pub async fn update_measure(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeasure>,
) -> AppResult<impl IntoResponse> {
    let rescheduled = input.due_at.is_some();

    let measure = MeasureRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "measure",
            id,
        }))?;

    if measure.status == MEASURE_DONE {
        fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Measure, id).await?;
    } else if rescheduled {
        fanout::reschedule(
            &state.pool,
            user.tenant_id,
            ReminderKind::Measure,
            measure.id,
            measure.due_at,
        )
        .await?;
    }

    log_activity(&state, user.tenant_id, user.user_id, "measure.updated", "measure", id).await;
    Ok(Json(DataResponse { data: measure }))
}

/// DELETE /measures/{id}
pub async fn delete_measure(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MeasureRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "measure",
            id,
        }));
    }

    fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Measure, id).await?;
    log_activity(&state, user.tenant_id, user.user_id, "measure.deleted", "measure", id).await;
    Ok(StatusCode::NO_CONTENT)
}
