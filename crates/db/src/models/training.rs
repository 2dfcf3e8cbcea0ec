//! Training record entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `trainings` table: one course/certification per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Training {
    pub id: DbId,
    pub tenant_id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub completed_at: Option<Timestamp>,
    /// When the certification lapses; drives the expiring-trainings report.
    pub valid_until: Option<Timestamp>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a training record.
#[derive(Debug, Deserialize)]
pub struct CreateTraining {
    pub user_id: DbId,
    pub title: String,
    pub completed_at: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
}

/// DTO for updating a training record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTraining {
    pub title: Option<String>,
    pub completed_at: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub status: Option<String>,
}
