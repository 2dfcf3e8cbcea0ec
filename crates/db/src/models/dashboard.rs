//! Dashboard summary DTO.

use serde::Serialize;

/// Aggregate counts shown on the tenant dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSummary {
    /// Incidents not yet closed.
    pub open_incidents: i64,
    /// Measures past their due date and not done.
    pub overdue_measures: i64,
    /// Meetings starting within the next 7 days.
    pub upcoming_meetings: i64,
    /// Audits/inspections scheduled within the next 7 days.
    pub upcoming_audits: i64,
    /// Trainings whose validity ends within the next 30 days.
    pub expiring_trainings: i64,
    /// SDS suggestions awaiting human confirmation.
    pub pending_sds_suggestions: i64,
}
