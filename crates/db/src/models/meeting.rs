//! Safety meeting entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `meetings` table. Creating or rescheduling a meeting
/// fans out reminders to eligible users.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    pub agenda: Option<String>,
    pub starts_at: Timestamp,
    pub location: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a meeting.
#[derive(Debug, Deserialize)]
pub struct CreateMeeting {
    pub title: String,
    pub agenda: Option<String>,
    pub starts_at: Timestamp,
    pub location: Option<String>,
}

/// DTO for updating a meeting. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateMeeting {
    pub title: Option<String>,
    pub agenda: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub location: Option<String>,
    pub status: Option<String>,
}
