//! Reminder dispatcher.
//!
//! [`ReminderDispatcher`] scans for PENDING reminders whose send time has
//! arrived, loads the referenced entity for current details, delivers over
//! the user's enabled channels, and marks each row SENT or FAILED. Rows are
//! processed sequentially and failures are strictly per-row: one bad
//! reminder never aborts the batch, and there is no retry or backoff.

use std::time::Duration;

use chrono::Utc;
use nova_core::reminders::ReminderKind;
use nova_core::types::{DbId, Timestamp};
use nova_db::models::reminder::Reminder;
use nova_db::repositories::{AuditRepo, MeasureRepo, MeetingRepo, ReminderRepo, UserRepo};
use nova_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::delivery::email::EmailDelivery;
use crate::delivery::sms::SmsDelivery;

// ---------------------------------------------------------------------------
// Errors and stats
// ---------------------------------------------------------------------------

/// Why a single reminder could not be delivered. The message is recorded on
/// the reminder row.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),

    #[error("{kind} {entity_id} no longer exists")]
    EntityMissing { kind: &'static str, entity_id: DbId },

    #[error("Recipient user {0} no longer exists")]
    UserMissing(DbId),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Counts from one dispatch pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub sent: u32,
    pub failed: u32,
}

// ---------------------------------------------------------------------------
// ReminderDispatcher
// ---------------------------------------------------------------------------

/// Delivers due reminders over email and SMS.
pub struct ReminderDispatcher {
    pool: DbPool,
    email: Option<EmailDelivery>,
    sms: Option<SmsDelivery>,
}

impl ReminderDispatcher {
    /// Create a dispatcher with explicit delivery channels. A `None`
    /// channel is treated as not configured and skipped.
    pub fn new(pool: DbPool, email: Option<EmailDelivery>, sms: Option<SmsDelivery>) -> Self {
        Self { pool, email, sms }
    }

    /// Run the dispatch loop until `cancel` is triggered, sweeping once per
    /// `interval`.
    pub async fn run(&self, cancel: CancellationToken, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Reminder dispatcher cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    match self.run_once().await {
                        Ok(stats) if stats.sent > 0 || stats.failed > 0 => {
                            tracing::info!(sent = stats.sent, failed = stats.failed, "Dispatch pass complete");
                        }
                        Ok(_) => {
                            tracing::debug!("Dispatch pass complete, nothing due");
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Dispatch pass failed");
                        }
                    }
                }
            }
        }
    }

    /// One sequential sweep over the due PENDING reminders.
    ///
    /// The outer `Result` is only an error when the due-list query itself
    /// fails; per-reminder problems are recorded on the row and counted in
    /// the returned stats.
    pub async fn run_once(&self) -> Result<DispatchStats, sqlx::Error> {
        let due = ReminderRepo::find_due(&self.pool, Utc::now()).await?;
        let mut stats = DispatchStats::default();

        for reminder in &due {
            match self.process_one(reminder).await {
                Ok(()) => {
                    if let Err(e) = ReminderRepo::mark_sent(&self.pool, reminder.id).await {
                        tracing::error!(reminder_id = reminder.id, error = %e, "Failed to mark reminder sent");
                    }
                    stats.sent += 1;
                }
                Err(e) => {
                    tracing::warn!(reminder_id = reminder.id, error = %e, "Reminder delivery failed");
                    if let Err(mark_err) =
                        ReminderRepo::mark_failed(&self.pool, reminder.id, &e.to_string()).await
                    {
                        tracing::error!(reminder_id = reminder.id, error = %mark_err, "Failed to mark reminder failed");
                    }
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Deliver a single reminder.
    ///
    /// Succeeds when at least one enabled channel delivered; fails with the
    /// collected channel errors otherwise.
    async fn process_one(&self, reminder: &Reminder) -> Result<(), DispatchError> {
        let kind = ReminderKind::parse(&reminder.entity_kind)
            .ok_or_else(|| DispatchError::UnknownKind(reminder.entity_kind.clone()))?;

        let (title, event_at) = self.load_entity(kind, reminder.entity_id).await?;

        let user = UserRepo::find_by_id(&self.pool, reminder.tenant_id, reminder.user_id)
            .await?
            .ok_or(DispatchError::UserMissing(reminder.user_id))?;

        let subject = format!("Reminder: {title}");
        let body = format!(
            "Upcoming {}: \"{}\" on {}.",
            kind.as_str(),
            title,
            event_at.format("%Y-%m-%d %H:%M UTC")
        );

        let mut delivered = false;
        let mut errors: Vec<String> = Vec::new();

        if user.email_enabled {
            match &self.email {
                Some(mailer) => match mailer.send(&user.email, &subject, &body).await {
                    Ok(()) => delivered = true,
                    Err(e) => errors.push(format!("email: {e}")),
                },
                None => errors.push("email: channel not configured".to_string()),
            }
        }

        if user.sms_enabled {
            match (&self.sms, &user.phone) {
                (Some(sender), Some(phone)) => match sender.send(phone, &body).await {
                    Ok(()) => delivered = true,
                    Err(e) => errors.push(format!("sms: {e}")),
                },
                (None, _) => errors.push("sms: channel not configured".to_string()),
                (_, None) => errors.push("sms: user has no phone number".to_string()),
            }
        }

        if delivered {
            return Ok(());
        }

        if errors.is_empty() {
            errors.push("no delivery channel enabled".to_string());
        }
        Err(DispatchError::Delivery(errors.join("; ")))
    }

    /// Load the referenced entity's current title and date.
    ///
    /// Inspections live in the `audits` table, so both kinds resolve there.
    async fn load_entity(
        &self,
        kind: ReminderKind,
        entity_id: DbId,
    ) -> Result<(String, Timestamp), DispatchError> {
        match kind {
            ReminderKind::Meeting => MeetingRepo::find_any(&self.pool, entity_id)
                .await?
                .map(|m| (m.title, m.starts_at))
                .ok_or(DispatchError::EntityMissing {
                    kind: "meeting",
                    entity_id,
                }),
            ReminderKind::Audit | ReminderKind::Inspection => {
                AuditRepo::find_any(&self.pool, entity_id)
                    .await?
                    .map(|a| (a.title, a.scheduled_at))
                    .ok_or(DispatchError::EntityMissing {
                        kind: "audit",
                        entity_id,
                    })
            }
            ReminderKind::Measure => MeasureRepo::find_any(&self.pool, entity_id)
                .await?
                .map(|m| (m.title, m.due_at))
                .ok_or(DispatchError::EntityMissing {
                    kind: "measure",
                    entity_id,
                }),
        }
    }
}
