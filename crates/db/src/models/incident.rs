//! Incident (OSHA 300 log) models, yearly hours reports, and
//! recordkeeping aggregates.

use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `incidents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub occurred_at: Timestamp,
    /// `injury`, `illness`, `near_miss`, or `property_damage`.
    pub incident_type: String,
    pub severity: i16,
    pub recordable: bool,
    pub days_away: bool,
    pub restricted_duty: bool,
    pub job_transfer: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an incident.
#[derive(Debug, Deserialize)]
pub struct CreateIncident {
    pub title: String,
    pub description: Option<String>,
    pub occurred_at: Timestamp,
    pub incident_type: Option<String>,
    pub severity: Option<i16>,
    #[serde(default)]
    pub recordable: bool,
    #[serde(default)]
    pub days_away: bool,
    #[serde(default)]
    pub restricted_duty: bool,
    #[serde(default)]
    pub job_transfer: bool,
}

/// DTO for updating an incident. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateIncident {
    pub title: Option<String>,
    pub description: Option<String>,
    pub occurred_at: Option<Timestamp>,
    pub incident_type: Option<String>,
    pub severity: Option<i16>,
    pub recordable: Option<bool>,
    pub days_away: Option<bool>,
    pub restricted_duty: Option<bool>,
    pub job_transfer: Option<bool>,
    pub status: Option<String>,
}

/// A row from the `hours_reports` table: total hours worked and average
/// headcount for one tenant-year, the denominator side of the OSHA rates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HoursReport {
    pub id: DbId,
    pub tenant_id: DbId,
    pub year: i32,
    pub total_hours_worked: f64,
    pub average_employees: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a yearly hours report.
#[derive(Debug, Deserialize)]
pub struct UpsertHoursReport {
    pub total_hours_worked: f64,
    pub average_employees: i32,
}

/// Aggregated incident counts for one tenant-year, straight off the log.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct IncidentYearCounts {
    pub total_recordable_cases: i64,
    pub days_away_restricted_transfer_cases: i64,
    pub lost_time_cases: i64,
}
