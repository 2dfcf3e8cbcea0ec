//! Handlers for a user's own scheduled reminders.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::types::DbId;
use nova_db::repositories::ReminderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /reminders -- the authenticated user's reminders, soonest first.
pub async fn list_reminders(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = ReminderRepo::list_for_user(&state.pool, user.tenant_id, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// DELETE /reminders/{id} -- cancel one of your own pending reminders.
pub async fn cancel_reminder(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cancelled = ReminderRepo::cancel_own(&state.pool, user.tenant_id, user.user_id, id).await?;
    if !cancelled {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "reminder",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
