//! Insurance policy entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `insurance_policies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InsurancePolicy {
    pub id: DbId,
    pub tenant_id: DbId,
    pub carrier: String,
    pub policy_number: String,
    pub policy_type: Option<String>,
    pub premium_cents: i64,
    pub starts_at: Timestamp,
    pub expires_at: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a policy.
#[derive(Debug, Deserialize)]
pub struct CreatePolicy {
    pub carrier: String,
    pub policy_number: String,
    pub policy_type: Option<String>,
    pub premium_cents: Option<i64>,
    pub starts_at: Timestamp,
    pub expires_at: Timestamp,
}

/// DTO for updating a policy. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePolicy {
    pub carrier: Option<String>,
    pub policy_type: Option<String>,
    pub premium_cents: Option<i64>,
    pub starts_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub status: Option<String>,
}
