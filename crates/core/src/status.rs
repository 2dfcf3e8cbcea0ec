//! Well-known status string constants.
//!
//! Status columns are TEXT with CHECK constraints; the constants here must
//! match the allowed values in the migrations. Reminder statuses are
//! upper-case because they drive the dispatcher state machine; entity
//! statuses are lower-case display values.

// ---------------------------------------------------------------------------
// Scheduled reminders
// ---------------------------------------------------------------------------

/// Reminder created but not yet delivered.
pub const REMINDER_PENDING: &str = "PENDING";
/// Reminder delivered on at least one channel.
pub const REMINDER_SENT: &str = "SENT";
/// Delivery failed on every enabled channel; see the `error` column.
pub const REMINDER_FAILED: &str = "FAILED";
/// Reminder withdrawn because its entity was deleted or rescheduled.
pub const REMINDER_CANCELLED: &str = "CANCELLED";

// ---------------------------------------------------------------------------
// SDS suggestions
// ---------------------------------------------------------------------------

/// Confidence above the auto-apply threshold; the chemical record was updated.
pub const SDS_AUTO_APPLIED: &str = "auto_applied";
/// Mid-confidence match awaiting human confirmation.
pub const SDS_SUGGESTED: &str = "suggested";
/// A human confirmed the suggested match.
pub const SDS_CONFIRMED: &str = "confirmed";
/// A human rejected the suggested match.
pub const SDS_REJECTED: &str = "rejected";

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

pub const DOCUMENT_DRAFT: &str = "draft";
pub const DOCUMENT_APPROVED: &str = "approved";
pub const DOCUMENT_ARCHIVED: &str = "archived";

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

pub const INCIDENT_OPEN: &str = "open";
pub const INCIDENT_INVESTIGATING: &str = "investigating";
pub const INCIDENT_CLOSED: &str = "closed";

// ---------------------------------------------------------------------------
// Measures (corrective actions)
// ---------------------------------------------------------------------------

pub const MEASURE_OPEN: &str = "open";
pub const MEASURE_IN_PROGRESS: &str = "in_progress";
pub const MEASURE_DONE: &str = "done";

// ---------------------------------------------------------------------------
// Scheduled events (meetings, audits)
// ---------------------------------------------------------------------------

pub const EVENT_PLANNED: &str = "planned";
pub const EVENT_COMPLETED: &str = "completed";
pub const EVENT_CANCELLED: &str = "cancelled";
