//! Risk assessment entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `risks` table. `score` is probability x consequence,
/// computed server-side on create/update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Risk {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    pub category: Option<String>,
    pub probability: i16,
    pub consequence: i16,
    pub score: i16,
    pub mitigation: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a risk.
#[derive(Debug, Deserialize)]
pub struct CreateRisk {
    pub title: String,
    pub category: Option<String>,
    pub probability: i16,
    pub consequence: i16,
    pub mitigation: Option<String>,
}

/// DTO for updating a risk. All fields are optional; when either axis
/// changes the handler recomputes `score`.
#[derive(Debug, Deserialize)]
pub struct UpdateRisk {
    pub title: Option<String>,
    pub category: Option<String>,
    pub probability: Option<i16>,
    pub consequence: Option<i16>,
    pub mitigation: Option<String>,
    pub status: Option<String>,
}
