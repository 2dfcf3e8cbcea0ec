//! Reminder eligibility and scheduling rules.
//!
//! The pure half of the reminder pipeline: given a user's notification
//! preferences and an upcoming event, decide whether a reminder should be
//! created and when it should fire. Persistence (including the duplicate
//! guard against existing PENDING/SENT rows) lives in `nova-db`; delivery
//! lives in `nova-events`.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// ReminderKind
// ---------------------------------------------------------------------------

/// The kinds of entity a reminder can point at.
///
/// Stored in `scheduled_reminders.entity_kind` via [`ReminderKind::as_str`].
/// Inspections are rows in the `audits` table with `audit_type =
/// 'inspection'`; they carry their own kind here because users opt in to
/// inspection reminders separately from audit reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Meeting,
    Inspection,
    Audit,
    Measure,
}

impl ReminderKind {
    /// Database/string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Inspection => "inspection",
            Self::Audit => "audit",
            Self::Measure => "measure",
        }
    }

    /// Parse the database representation back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "meeting" => Some(Self::Meeting),
            "inspection" => Some(Self::Inspection),
            "audit" => Some(Self::Audit),
            "measure" => Some(Self::Measure),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RecipientPrefs
// ---------------------------------------------------------------------------

/// The slice of a user row the fan-out decision needs.
#[derive(Debug, Clone, Copy)]
pub struct RecipientPrefs {
    pub notify_meetings: bool,
    pub notify_inspections: bool,
    pub notify_audits: bool,
    pub notify_measures: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    /// How many days before the event the reminder should fire.
    pub reminder_days_before: i32,
}

impl RecipientPrefs {
    /// Whether the user has opted in to reminders for this entity kind.
    pub fn wants(&self, kind: ReminderKind) -> bool {
        match kind {
            ReminderKind::Meeting => self.notify_meetings,
            ReminderKind::Inspection => self.notify_inspections,
            ReminderKind::Audit => self.notify_audits,
            ReminderKind::Measure => self.notify_measures,
        }
    }

    /// Whether at least one delivery channel is enabled.
    pub fn has_channel(&self) -> bool {
        self.email_enabled || self.sms_enabled
    }
}

// ---------------------------------------------------------------------------
// Fan-out decision
// ---------------------------------------------------------------------------

/// When a reminder for an event at `event_at` should fire for a user who
/// wants `days_before` days of lead time.
pub fn send_time(event_at: Timestamp, days_before: i32) -> Timestamp {
    event_at - Duration::days(days_before.max(0) as i64)
}

/// Decide whether a reminder should be created for one user.
///
/// Returns the `scheduled_for` timestamp when the user is eligible, or
/// `None` when the user opted out of this kind, has no enabled channel, or
/// the send time has already passed. The duplicate check against existing
/// PENDING/SENT rows is a database concern and happens in the fan-out
/// routine, not here.
pub fn fan_out_decision(
    prefs: &RecipientPrefs,
    kind: ReminderKind,
    event_at: Timestamp,
    now: Timestamp,
) -> Option<Timestamp> {
    if !prefs.wants(kind) {
        return None;
    }
    if !prefs.has_channel() {
        return None;
    }
    let scheduled_for = send_time(event_at, prefs.reminder_days_before);
    if scheduled_for <= now {
        return None;
    }
    Some(scheduled_for)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn prefs() -> RecipientPrefs {
        RecipientPrefs {
            notify_meetings: true,
            notify_inspections: true,
            notify_audits: true,
            notify_measures: true,
            email_enabled: true,
            sms_enabled: false,
            reminder_days_before: 3,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
    }

    #[test]
    fn eligible_user_gets_send_time_days_before_event() {
        let now = at(2026, 3, 1);
        let event = at(2026, 3, 10);
        let scheduled = fan_out_decision(&prefs(), ReminderKind::Meeting, event, now)
            .expect("should schedule");
        assert_eq!(scheduled, at(2026, 3, 7));
    }

    #[test]
    fn opted_out_kind_is_skipped_regardless_of_other_settings() {
        let mut p = prefs();
        p.notify_meetings = false;
        let now = at(2026, 3, 1);
        let event = at(2026, 3, 10);
        assert_eq!(fan_out_decision(&p, ReminderKind::Meeting, event, now), None);
        // Other kinds are unaffected.
        assert!(fan_out_decision(&p, ReminderKind::Audit, event, now).is_some());
    }

    #[test]
    fn both_channels_disabled_is_skipped() {
        let mut p = prefs();
        p.email_enabled = false;
        p.sms_enabled = false;
        let now = at(2026, 3, 1);
        let event = at(2026, 3, 10);
        assert_eq!(fan_out_decision(&p, ReminderKind::Meeting, event, now), None);
    }

    #[test]
    fn send_time_in_the_past_is_skipped() {
        let now = at(2026, 3, 8);
        // Event in 2 days, but the user wants 3 days of lead time.
        let event = at(2026, 3, 10);
        assert_eq!(fan_out_decision(&prefs(), ReminderKind::Meeting, event, now), None);
    }

    #[test]
    fn negative_days_before_clamps_to_event_time() {
        let event = at(2026, 3, 10);
        assert_eq!(send_time(event, -5), event);
    }

    #[test]
    fn kind_round_trips_through_string_form() {
        for kind in [
            ReminderKind::Meeting,
            ReminderKind::Inspection,
            ReminderKind::Audit,
            ReminderKind::Measure,
        ] {
            assert_eq!(ReminderKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ReminderKind::parse("holiday"), None);
    }
}
