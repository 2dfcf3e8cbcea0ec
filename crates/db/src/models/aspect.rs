//! Environmental aspect entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `environmental_aspects` table (ISO 14001 register).
/// `score` and `is_significant` are computed server-side.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnvironmentalAspect {
    pub id: DbId,
    pub tenant_id: DbId,
    pub activity: String,
    pub aspect: String,
    pub impact: Option<String>,
    pub severity: i16,
    pub frequency: i16,
    pub regulatory_requirement: bool,
    pub score: i16,
    pub is_significant: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an environmental aspect.
#[derive(Debug, Deserialize)]
pub struct CreateAspect {
    pub activity: String,
    pub aspect: String,
    pub impact: Option<String>,
    pub severity: i16,
    pub frequency: i16,
    #[serde(default)]
    pub regulatory_requirement: bool,
}

/// DTO for updating an environmental aspect. All fields are optional;
/// changing any scoring input recomputes `score` and `is_significant`.
#[derive(Debug, Deserialize)]
pub struct UpdateAspect {
    pub activity: Option<String>,
    pub aspect: Option<String>,
    pub impact: Option<String>,
    pub severity: Option<i16>,
    pub frequency: Option<i16>,
    pub regulatory_requirement: Option<bool>,
}
