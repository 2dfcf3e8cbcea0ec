//! Every repository query must be scoped to one tenant. These tests create
//! two tenants and verify rows never leak across the boundary.

use chrono::{Duration, Utc};
use nova_core::types::DbId;
use nova_db::models::chemical::CreateChemical;
use nova_db::models::meeting::{CreateMeeting, UpdateMeeting};
use nova_db::models::tenant::CreateTenant;
use nova_db::repositories::{ChemicalRepo, MeetingRepo, TenantRepo};
use sqlx::PgPool;

async fn new_tenant(pool: &PgPool, name: &str) -> DbId {
    TenantRepo::create(
        pool,
        &CreateTenant {
            name: name.to_string(),
            org_number: None,
            country: None,
        },
    )
    .await
    .expect("tenant creation should succeed")
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_is_tenant_scoped(pool: PgPool) {
    let tenant_a = new_tenant(&pool, "Tenant A").await;
    let tenant_b = new_tenant(&pool, "Tenant B").await;

    let meeting = MeetingRepo::create(
        &pool,
        tenant_a,
        &CreateMeeting {
            title: "Tenant A meeting".to_string(),
            agenda: None,
            starts_at: Utc::now() + Duration::days(5),
            location: None,
        },
    )
    .await
    .expect("create should succeed");

    // Visible to its own tenant.
    assert!(MeetingRepo::find_by_id(&pool, tenant_a, meeting.id)
        .await
        .expect("find should succeed")
        .is_some());

    // Invisible to the other tenant.
    assert!(MeetingRepo::find_by_id(&pool, tenant_b, meeting.id)
        .await
        .expect("find should succeed")
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_are_tenant_scoped(pool: PgPool) {
    let tenant_a = new_tenant(&pool, "Tenant A").await;
    let tenant_b = new_tenant(&pool, "Tenant B").await;

    let meeting = MeetingRepo::create(
        &pool,
        tenant_a,
        &CreateMeeting {
            title: "Tenant A meeting".to_string(),
            agenda: None,
            starts_at: Utc::now() + Duration::days(5),
            location: None,
        },
    )
    .await
    .expect("create should succeed");

    // Cross-tenant update touches nothing.
    let updated = MeetingRepo::update(
        &pool,
        tenant_b,
        meeting.id,
        &UpdateMeeting {
            title: Some("Hijacked".to_string()),
            agenda: None,
            starts_at: None,
            location: None,
            status: None,
        },
    )
    .await
    .expect("update should succeed");
    assert!(updated.is_none());

    // Cross-tenant delete removes nothing.
    assert!(!MeetingRepo::delete(&pool, tenant_b, meeting.id)
        .await
        .expect("delete should succeed"));

    // The row is untouched.
    let row = MeetingRepo::find_by_id(&pool, tenant_a, meeting.id)
        .await
        .expect("find should succeed")
        .expect("row should exist");
    assert_eq!(row.title, "Tenant A meeting");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lists_only_return_own_tenant_rows(pool: PgPool) {
    let tenant_a = new_tenant(&pool, "Tenant A").await;
    let tenant_b = new_tenant(&pool, "Tenant B").await;

    for (tenant, name) in [(tenant_a, "Acetone"), (tenant_b, "Toluene")] {
        ChemicalRepo::create(
            &pool,
            tenant,
            &CreateChemical {
                product_name: name.to_string(),
                supplier: None,
                cas_number: None,
                hazard_class: None,
                storage_location: None,
            },
        )
        .await
        .expect("create should succeed");
    }

    let list_a = ChemicalRepo::list(&pool, tenant_a).await.expect("list should succeed");
    assert_eq!(list_a.len(), 1);
    assert_eq!(list_a[0].product_name, "Acetone");

    let list_b = ChemicalRepo::list(&pool, tenant_b).await.expect("list should succeed");
    assert_eq!(list_b.len(), 1);
    assert_eq!(list_b[0].product_name, "Toluene");
}
