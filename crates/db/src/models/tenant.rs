//! Tenant entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tenants` table. The root of all data isolation: every
/// other tenant-owned table references `tenants.id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub org_number: Option<String>,
    /// `"NO"` or `"US"`; selects which regulatory vocabulary the UI shows.
    pub country: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tenant (used by self-service registration).
#[derive(Debug, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub org_number: Option<String>,
    pub country: Option<String>,
}

/// DTO for updating a tenant. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTenant {
    pub name: Option<String>,
    pub org_number: Option<String>,
    pub country: Option<String>,
    pub is_active: Option<bool>,
}
