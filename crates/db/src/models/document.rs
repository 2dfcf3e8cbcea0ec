//! Controlled document entity model and DTOs.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `documents` table (procedures, policies, manuals).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    pub category: Option<String>,
    pub version: i32,
    pub status: String,
    pub next_review_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a document.
#[derive(Debug, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub category: Option<String>,
    pub next_review_at: Option<Timestamp>,
}

/// DTO for updating a document. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateDocument {
    pub title: Option<String>,
    pub category: Option<String>,
    pub version: Option<i32>,
    pub status: Option<String>,
    pub next_review_at: Option<Timestamp>,
}
