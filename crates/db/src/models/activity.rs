//! Activity log models.

use nova_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `activity_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityEntry {
    pub id: DbId,
    pub tenant_id: DbId,
    pub user_id: Option<DbId>,
    /// Dot-separated action name, e.g. `"incident.created"`.
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub detail: serde_json::Value,
    pub created_at: Timestamp,
}

/// A page of activity entries plus the unpaged total.
#[derive(Debug, Serialize)]
pub struct ActivityPage {
    pub items: Vec<ActivityEntry>,
    pub total: i64,
}
