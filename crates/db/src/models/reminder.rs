//! Scheduled reminder model.

use nova_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `scheduled_reminders` table.
///
/// Rows are created by the fan-out routine in `PENDING` state and moved to
/// `SENT`/`FAILED` by the dispatcher, or to `CANCELLED` when the referenced
/// entity is deleted. There is no create DTO: rows are only ever inserted
/// by the fan-out routine, never directly from a request body.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reminder {
    pub id: DbId,
    pub tenant_id: DbId,
    pub user_id: DbId,
    /// `meeting`, `inspection`, `audit`, or `measure`.
    pub entity_kind: String,
    pub entity_id: DbId,
    pub scheduled_for: Timestamp,
    pub status: String,
    pub sent_at: Option<Timestamp>,
    pub error: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
