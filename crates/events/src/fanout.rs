//! Reminder fan-out.
//!
//! Given an upcoming entity, create PENDING reminders for every eligible
//! active user in the tenant. Eligibility (per-kind opt-in, channel toggles,
//! lead time in the future) is decided by `nova_core::reminders`; this
//! module adds the database side: the candidate set and the duplicate guard
//! against existing PENDING/SENT rows.

use chrono::Utc;
use nova_core::reminders::{fan_out_decision, ReminderKind};
use nova_core::types::{DbId, Timestamp};
use nova_db::repositories::{ReminderRepo, UserRepo};
use nova_db::DbPool;

/// Fan out reminders for one upcoming entity.
///
/// Returns the number of reminders created. Users who opted out of the
/// kind, have no enabled channel, whose send time has already passed, or
/// who already have a PENDING/SENT reminder for this entity are skipped.
pub async fn fan_out(
    pool: &DbPool,
    tenant_id: DbId,
    kind: ReminderKind,
    entity_id: DbId,
    event_at: Timestamp,
) -> Result<u32, sqlx::Error> {
    let candidates = UserRepo::list_active(pool, tenant_id).await?;
    let now = Utc::now();

    let mut created = 0u32;
    for user in &candidates {
        let Some(scheduled_for) = fan_out_decision(&user.reminder_prefs(), kind, event_at, now)
        else {
            continue;
        };

        if ReminderRepo::exists_active(pool, user.id, kind, entity_id).await? {
            continue;
        }

        ReminderRepo::create(pool, tenant_id, user.id, kind, entity_id, scheduled_for).await?;
        created += 1;
    }

    if created > 0 {
        tracing::info!(
            tenant_id,
            entity_kind = kind.as_str(),
            entity_id,
            created,
            "Reminders fanned out"
        );
    }

    Ok(created)
}

/// Re-fan reminders after an entity was rescheduled: cancel the PENDING
/// rows pointing at the old date, then fan out against the new one.
pub async fn reschedule(
    pool: &DbPool,
    tenant_id: DbId,
    kind: ReminderKind,
    entity_id: DbId,
    event_at: Timestamp,
) -> Result<u32, sqlx::Error> {
    ReminderRepo::cancel_for_entity(pool, tenant_id, kind, entity_id).await?;
    fan_out(pool, tenant_id, kind, entity_id, event_at).await
}

/// Cancel every PENDING reminder for a deleted entity.
pub async fn cancel(
    pool: &DbPool,
    tenant_id: DbId,
    kind: ReminderKind,
    entity_id: DbId,
) -> Result<u64, sqlx::Error> {
    let cancelled = ReminderRepo::cancel_for_entity(pool, tenant_id, kind, entity_id).await?;
    if cancelled > 0 {
        tracing::info!(
            tenant_id,
            entity_kind = kind.as_str(),
            entity_id,
            cancelled,
            "Pending reminders cancelled"
        );
    }
    Ok(cancelled)
}
