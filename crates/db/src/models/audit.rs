//! Audit/inspection entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `audits` table: an ISO audit or a workplace inspection
/// (`audit_type = 'inspection'`). Scheduling one fans out reminders; the
/// reminder kind follows `audit_type` so users can opt in to inspections
/// and audits independently.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Audit {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    /// `internal`, `external`, or `inspection`.
    pub audit_type: String,
    /// Management-system standard, e.g. `"ISO 45001"`.
    pub standard: Option<String>,
    pub scheduled_at: Timestamp,
    pub findings: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an audit.
#[derive(Debug, Deserialize)]
pub struct CreateAudit {
    pub title: String,
    pub audit_type: Option<String>,
    pub standard: Option<String>,
    pub scheduled_at: Timestamp,
}

/// DTO for updating an audit. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAudit {
    pub title: Option<String>,
    pub audit_type: Option<String>,
    pub standard: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub findings: Option<String>,
    pub status: Option<String>,
}
