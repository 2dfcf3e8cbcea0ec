//! SDS match suggestion model.

use nova_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sds_suggestions` table: one scored link between an
/// inbound email attachment and a chemical record. Rows are created by the
/// SDS inbox endpoint; `suggested` rows await human confirmation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SdsSuggestion {
    pub id: DbId,
    pub tenant_id: DbId,
    pub chemical_id: DbId,
    pub filename: String,
    pub sender: String,
    pub subject: String,
    pub confidence: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
