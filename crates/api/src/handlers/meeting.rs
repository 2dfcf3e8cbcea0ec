//! Handlers for safety meetings.
//!
//! Creating a meeting fans out reminders to eligible users; rescheduling
//! re-fans them; deleting cancels the pending ones.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::reminders::ReminderKind;
use nova_core::types::DbId;
use nova_db::models::meeting::{CreateMeeting, UpdateMeeting};
use nova_db::repositories::MeetingRepo;
use nova_events::fanout;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /meetings
pub async fn list_meetings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = MeetingRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /meetings
pub async fn create_meeting(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateMeeting>,
) -> AppResult<impl IntoResponse> {
    let meeting = MeetingRepo::create(&state.pool, user.tenant_id, &input).await?;

    fanout::fan_out(
        &state.pool,
        user.tenant_id,
        ReminderKind::Meeting,
        meeting.id,
        meeting.starts_at,
    )
    .await?;

    log_activity(&state, user.tenant_id, user.user_id, "meeting.created", "meeting", meeting.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: meeting })))
}

/// GET /meetings/{id}
pub async fn get_meeting(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let meeting = MeetingRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "meeting",
            id,
        }))?;
    Ok(Json(DataResponse { data: meeting }))
}

/// PUT /meetings/{id}
///
/// A changed `starts_at` cancels the pending reminders and fans out fresh
/// ones against the new date.
pub async fn update_meeting(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<impl IntoResponse> {
    let rescheduled = input.starts_at.is_some();

    let meeting = MeetingRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "meeting",
            id,
        }))?;

    if rescheduled {
        fanout::reschedule(
            &state.pool,
            user.tenant_id,
            ReminderKind::Meeting,
            meeting.id,
            meeting.starts_at,
        )
        .await?;
    }

    log_activity(&state, user.tenant_id, user.user_id, "meeting.updated", "meeting", id).await;
    Ok(Json(DataResponse { data: meeting }))
}

/// DELETE /meetings/{id}
pub async fn delete_meeting(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MeetingRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "meeting",
            id,
        }));
    }

    fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Meeting, id).await?;
    log_activity(&state, user.tenant_id, user.user_id, "meeting.deleted", "meeting", id).await;
    Ok(StatusCode::NO_CONTENT)
}
