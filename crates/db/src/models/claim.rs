//! Workers' compensation claim entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workers_comp_claims` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkersCompClaim {
    pub id: DbId,
    pub tenant_id: DbId,
    pub incident_id: Option<DbId>,
    pub claim_number: String,
    pub carrier: Option<String>,
    pub amount_cents: i64,
    pub filed_at: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a claim.
#[derive(Debug, Deserialize)]
pub struct CreateClaim {
    pub incident_id: Option<DbId>,
    pub claim_number: String,
    pub carrier: Option<String>,
    pub amount_cents: Option<i64>,
    pub filed_at: Option<Timestamp>,
}

/// DTO for updating a claim. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateClaim {
    pub carrier: Option<String>,
    pub amount_cents: Option<i64>,
    pub status: Option<String>,
}
