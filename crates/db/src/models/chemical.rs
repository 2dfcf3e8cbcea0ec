//! Chemical inventory entity model and DTOs.

use chrono::NaiveDate;
use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `chemicals` table. `product_name`, `cas_number`, and
/// `supplier` feed the SDS attachment matching heuristic.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chemical {
    pub id: DbId,
    pub tenant_id: DbId,
    pub product_name: String,
    pub supplier: Option<String>,
    pub cas_number: Option<String>,
    pub hazard_class: Option<String>,
    pub storage_location: Option<String>,
    /// Revision date of the most recently filed Safety Data Sheet.
    pub sds_revision_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a chemical record.
#[derive(Debug, Deserialize)]
pub struct CreateChemical {
    pub product_name: String,
    pub supplier: Option<String>,
    pub cas_number: Option<String>,
    pub hazard_class: Option<String>,
    pub storage_location: Option<String>,
}

/// DTO for updating a chemical record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateChemical {
    pub product_name: Option<String>,
    pub supplier: Option<String>,
    pub cas_number: Option<String>,
    pub hazard_class: Option<String>,
    pub storage_location: Option<String>,
    pub sds_revision_date: Option<NaiveDate>,
}
