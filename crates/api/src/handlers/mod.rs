//! HTTP handlers, one module per resource.

pub mod activity;
pub mod aspect;
pub mod audit;
pub mod auth;
pub mod chemical;
pub mod claim;
pub mod dashboard;
pub mod document;
pub mod goal;
pub mod incident;
pub mod insurance;
pub mod measure;
pub mod meeting;
pub mod reminder;
pub mod risk;
pub mod tenant;
pub mod training;
pub mod user;

use nova_core::types::DbId;
use nova_db::repositories::ActivityLogRepo;

use crate::state::AppState;

/// Append an activity log entry, logging (but not propagating) failures.
/// Activity logging must never fail the request that triggered it.
pub(crate) async fn log_activity(
    state: &AppState,
    tenant_id: DbId,
    user_id: DbId,
    action: &str,
    entity_type: &str,
    entity_id: DbId,
) {
    if let Err(e) = ActivityLogRepo::record(
        &state.pool,
        tenant_id,
        Some(user_id),
        action,
        Some(entity_type),
        Some(entity_id),
    )
    .await
    {
        tracing::warn!(error = %e, action, "Failed to record activity log entry");
    }
}
