//! Handlers for ISO audits and workplace inspections.
//!
//! Both live in the `audits` table; `audit_type = 'inspection'` marks an
//! inspection. The reminder kind follows the audit type so users can opt in
//! to inspection and audit reminders independently.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::reminders::ReminderKind;
use nova_core::types::DbId;
use nova_db::models::audit::{Audit, CreateAudit, UpdateAudit};
use nova_db::repositories::AuditRepo;
use nova_events::fanout;

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// The reminder kind an audit row fans out under.
fn reminder_kind(audit: &Audit) -> ReminderKind {
    if audit.audit_type == "inspection" {
        ReminderKind::Inspection
    } else {
        ReminderKind::Audit
    }
}

fn validate_audit_type(audit_type: &str) -> AppResult<()> {
    if !["internal", "external", "inspection"].contains(&audit_type) {
        return Err(AppError::BadRequest(format!(
            "Unknown audit_type: {audit_type}"
        )));
    }
    Ok(())
}

/// GET /audits
pub async fn list_audits(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = AuditRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /audits
pub async fn create_audit(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateAudit>,
) -> AppResult<impl IntoResponse> {
    if let Some(audit_type) = &input.audit_type {
        validate_audit_type(audit_type)?;
    }

    let audit = AuditRepo::create(&state.pool, user.tenant_id, &input).await?;

    fanout::fan_out(
        &state.pool,
        user.tenant_id,
        reminder_kind(&audit),
        audit.id,
        audit.scheduled_at,
    )
    .await?;

    log_activity(&state, user.tenant_id, user.user_id, "audit.created", "audit", audit.id).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: audit })))
}

/// GET /audits/{id}
pub async fn get_audit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let audit = AuditRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "audit", id }))?;
    Ok(Json(DataResponse { data: audit }))
}

/// PUT /audits/{id}
///
/// A changed schedule or audit type re-fans the reminders. Pending rows
/// under both kinds are cancelled first, since the kind may have flipped
/// between `audit` and `inspection`.
pub async fn update_audit(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAudit>,
) -> AppResult<impl IntoResponse> {
    if let Some(audit_type) = &input.audit_type {
        validate_audit_type(audit_type)?;
    }

    let refan = input.scheduled_at.is_some() || input.audit_type.is_some();

    let audit = AuditRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "audit", id }))?;

    if refan {
        fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Audit, id).await?;
        fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Inspection, id).await?;
        fanout::fan_out(
            &state.pool,
            user.tenant_id,
            reminder_kind(&audit),
            audit.id,
            audit.scheduled_at,
        )
        .await?;
    }

    log_activity(&state, user.tenant_id, user.user_id, "audit.updated", "audit", id).await;
    Ok(Json(DataResponse { data: audit }))
}

/// DELETE /audits/{id}
pub async fn delete_audit(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AuditRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "audit", id }));
    }

    fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Audit, id).await?;
    fanout::cancel(&state.pool, user.tenant_id, ReminderKind::Inspection, id).await?;
    log_activity(&state, user.tenant_id, user.user_id, "audit.deleted", "audit", id).await;
    Ok(StatusCode::NO_CONTENT)
}
