//! Database-backed tests for reminder fan-out, idempotence, cancellation,
//! and dispatch bookkeeping.

use chrono::{Duration, Utc};
use nova_core::reminders::ReminderKind;
use nova_core::roles::ROLE_EMPLOYEE;
use nova_core::status::{REMINDER_CANCELLED, REMINDER_FAILED, REMINDER_PENDING};
use nova_core::types::DbId;
use nova_db::models::meeting::CreateMeeting;
use nova_db::models::tenant::CreateTenant;
use nova_db::models::user::{CreateUser, UpdateNotificationSettings};
use nova_db::repositories::{MeetingRepo, ReminderRepo, TenantRepo, UserRepo};
use nova_events::{fanout, ReminderDispatcher};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_tenant(pool: &PgPool) -> DbId {
    TenantRepo::create(
        pool,
        &CreateTenant {
            name: "Fjord Fabrication AS".to_string(),
            org_number: None,
            country: None,
        },
    )
    .await
    .expect("tenant creation should succeed")
    .id
}

async fn seed_user(pool: &PgPool, tenant_id: DbId, email: &str) -> DbId {
    UserRepo::create(
        pool,
        tenant_id,
        &CreateUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            phone: None,
            role: ROLE_EMPLOYEE.to_string(),
            // Never logged in with; fan-out only reads preference columns.
            password_hash: "unused".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
    .id
}

async fn seed_meeting(pool: &PgPool, tenant_id: DbId, days_ahead: i64) -> DbId {
    MeetingRepo::create(
        pool,
        tenant_id,
        &CreateMeeting {
            title: "Quarterly safety review".to_string(),
            agenda: None,
            starts_at: Utc::now() + Duration::days(days_ahead),
            location: None,
        },
    )
    .await
    .expect("meeting creation should succeed")
    .id
}

async fn statuses_for_entity(pool: &PgPool, tenant_id: DbId, user_id: DbId) -> Vec<String> {
    ReminderRepo::list_for_user(pool, tenant_id, user_id)
        .await
        .expect("listing should succeed")
        .into_iter()
        .map(|r| r.status)
        .collect()
}

// ---------------------------------------------------------------------------
// Fan-out eligibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fan_out_creates_pending_reminders_for_eligible_users(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;

    let created = fanout::fan_out(
        &pool,
        tenant_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(10),
    )
    .await
    .expect("fan-out should succeed");

    assert_eq!(created, 1);
    assert_eq!(
        statuses_for_entity(&pool, tenant_id, user_id).await,
        vec![REMINDER_PENDING.to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn opted_out_user_gets_no_reminder(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;

    UserRepo::update_notification_settings(
        &pool,
        tenant_id,
        user_id,
        &UpdateNotificationSettings {
            notify_meetings: Some(false),
            notify_inspections: None,
            notify_audits: None,
            notify_measures: None,
            email_enabled: None,
            sms_enabled: None,
            reminder_days_before: None,
        },
    )
    .await
    .expect("settings update should succeed");

    let created = fanout::fan_out(
        &pool,
        tenant_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(10),
    )
    .await
    .expect("fan-out should succeed");

    assert_eq!(created, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_inside_lead_time_gets_no_reminder(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    seed_user(&pool, tenant_id, "worker@fjord.no").await;
    // Default lead time is 3 days; the meeting is tomorrow.
    let meeting_id = seed_meeting(&pool, tenant_id, 1).await;

    let created = fanout::fan_out(
        &pool,
        tenant_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(1),
    )
    .await
    .expect("fan-out should succeed");

    assert_eq!(created, 0);
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn double_fan_out_creates_no_duplicates(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;
    let event_at = Utc::now() + Duration::days(10);

    let first = fanout::fan_out(&pool, tenant_id, ReminderKind::Meeting, meeting_id, event_at)
        .await
        .expect("fan-out should succeed");
    let second = fanout::fan_out(&pool, tenant_id, ReminderKind::Meeting, meeting_id, event_at)
        .await
        .expect("fan-out should succeed");

    assert_eq!(first, 1);
    assert_eq!(second, 0, "second fan-out must not duplicate reminders");
    assert_eq!(statuses_for_entity(&pool, tenant_id, user_id).await.len(), 1);
}

// ---------------------------------------------------------------------------
// Cancellation and reschedule
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancel_marks_pending_rows_cancelled(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;

    fanout::fan_out(
        &pool,
        tenant_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(10),
    )
    .await
    .expect("fan-out should succeed");

    let cancelled = fanout::cancel(&pool, tenant_id, ReminderKind::Meeting, meeting_id)
        .await
        .expect("cancel should succeed");

    assert_eq!(cancelled, 1);
    assert_eq!(
        statuses_for_entity(&pool, tenant_id, user_id).await,
        vec![REMINDER_CANCELLED.to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reschedule_replaces_pending_reminder(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;

    fanout::fan_out(
        &pool,
        tenant_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(10),
    )
    .await
    .expect("fan-out should succeed");

    let created = fanout::reschedule(
        &pool,
        tenant_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(20),
    )
    .await
    .expect("reschedule should succeed");

    assert_eq!(created, 1);
    let statuses = statuses_for_entity(&pool, tenant_id, user_id).await;
    assert_eq!(statuses.len(), 2);
    assert!(statuses.contains(&REMINDER_CANCELLED.to_string()));
    assert!(statuses.contains(&REMINDER_PENDING.to_string()));
}

// ---------------------------------------------------------------------------
// Dispatch bookkeeping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dispatch_marks_undeliverable_reminder_failed(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;

    // Due now; the user has email enabled but no channel is configured.
    ReminderRepo::create(
        &pool,
        tenant_id,
        user_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() - Duration::minutes(5),
    )
    .await
    .expect("reminder creation should succeed");

    let dispatcher = ReminderDispatcher::new(pool.clone(), None, None);
    let stats = dispatcher.run_once().await.expect("dispatch should succeed");

    assert_eq!(stats.sent, 0);
    assert_eq!(stats.failed, 1);

    let reminders = ReminderRepo::list_for_user(&pool, tenant_id, user_id)
        .await
        .expect("listing should succeed");
    assert_eq!(reminders[0].status, REMINDER_FAILED);
    assert!(
        reminders[0].error.as_deref().unwrap_or("").contains("email"),
        "error string should name the failed channel"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dispatch_skips_reminders_not_yet_due(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;
    let meeting_id = seed_meeting(&pool, tenant_id, 10).await;

    ReminderRepo::create(
        &pool,
        tenant_id,
        user_id,
        ReminderKind::Meeting,
        meeting_id,
        Utc::now() + Duration::days(7),
    )
    .await
    .expect("reminder creation should succeed");

    let dispatcher = ReminderDispatcher::new(pool.clone(), None, None);
    let stats = dispatcher.run_once().await.expect("dispatch should succeed");

    assert_eq!(stats.sent, 0);
    assert_eq!(stats.failed, 0);

    let reminders = ReminderRepo::list_for_user(&pool, tenant_id, user_id)
        .await
        .expect("listing should succeed");
    assert_eq!(reminders[0].status, REMINDER_PENDING);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dispatch_marks_reminder_failed_when_entity_is_gone(pool: PgPool) {
    let tenant_id = seed_tenant(&pool).await;
    let user_id = seed_user(&pool, tenant_id, "worker@fjord.no").await;

    // Points at a meeting id that does not exist.
    ReminderRepo::create(
        &pool,
        tenant_id,
        user_id,
        ReminderKind::Meeting,
        999_999,
        Utc::now() - Duration::minutes(5),
    )
    .await
    .expect("reminder creation should succeed");

    let dispatcher = ReminderDispatcher::new(pool.clone(), None, None);
    let stats = dispatcher.run_once().await.expect("dispatch should succeed");

    assert_eq!(stats.failed, 1);

    let reminders = ReminderRepo::list_for_user(&pool, tenant_id, user_id)
        .await
        .expect("listing should succeed");
    assert_eq!(reminders[0].status, REMINDER_FAILED);
    assert!(reminders[0]
        .error
        .as_deref()
        .unwrap_or("")
        .contains("no longer exists"));
}
