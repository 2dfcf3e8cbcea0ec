//! Corrective measure entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `measures` table: a corrective/preventive action,
/// optionally linked to the incident or risk that triggered it. Creating
/// a measure fans out reminders ahead of its due date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measure {
    pub id: DbId,
    pub tenant_id: DbId,
    pub incident_id: Option<DbId>,
    pub risk_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub responsible_user_id: Option<DbId>,
    pub due_at: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a measure.
#[derive(Debug, Deserialize)]
pub struct CreateMeasure {
    pub incident_id: Option<DbId>,
    pub risk_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub responsible_user_id: Option<DbId>,
    pub due_at: Timestamp,
}

/// DTO for updating a measure. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateMeasure {
    pub title: Option<String>,
    pub description: Option<String>,
    pub responsible_user_id: Option<DbId>,
    pub due_at: Option<Timestamp>,
    pub status: Option<String>,
}
