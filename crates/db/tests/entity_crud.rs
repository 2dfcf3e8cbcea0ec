//! Integration tests for the repository layer against a real database:
//! CRUD round trips, partial updates, aggregates, and status transitions.

use chrono::{Duration, TimeZone, Utc};
use nova_core::aspects::significance;
use nova_core::status::{SDS_CONFIRMED, SDS_SUGGESTED};
use nova_core::types::DbId;
use nova_db::models::chemical::CreateChemical;
use nova_db::models::document::{CreateDocument, UpdateDocument};
use nova_db::models::incident::{CreateIncident, UpsertHoursReport};
use nova_db::models::risk::CreateRisk;
use nova_db::models::tenant::CreateTenant;
use nova_db::repositories::{
    AspectRepo, ChemicalRepo, DocumentRepo, IncidentRepo, RiskRepo, SdsSuggestionRepo, TenantRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_tenant(pool: &PgPool) -> DbId {
    TenantRepo::create(
        pool,
        &CreateTenant {
            name: "Fjord Fabrication AS".to_string(),
            org_number: Some("987654321".to_string()),
            country: Some("NO".to_string()),
        },
    )
    .await
    .expect("tenant creation should succeed")
    .id
}

fn new_incident(title: &str, recordable: bool, days_away: bool) -> CreateIncident {
    CreateIncident {
        title: title.to_string(),
        description: None,
        occurred_at: Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
        incident_type: Some("injury".to_string()),
        severity: Some(2),
        recordable,
        days_away,
        restricted_duty: false,
        job_transfer: false,
    }
}

// ---------------------------------------------------------------------------
// Documents: CRUD round trip with partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn document_crud_round_trip(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;

    let doc = DocumentRepo::create(
        &pool,
        tenant_id,
        &CreateDocument {
            title: "Hot work procedure".to_string(),
            category: Some("procedure".to_string()),
            next_review_at: None,
        },
    )
    .await
    .expect("create should succeed");
    assert_eq!(doc.status, "draft");
    assert_eq!(doc.version, 1);

    // Partial update: only status changes, title survives.
    let updated = DocumentRepo::update(
        &pool,
        tenant_id,
        doc.id,
        &UpdateDocument {
            title: None,
            category: None,
            version: Some(2),
            status: Some("approved".to_string()),
            next_review_at: None,
        },
    )
    .await
    .expect("update should succeed")
    .expect("row should exist");
    assert_eq!(updated.title, "Hot work procedure");
    assert_eq!(updated.status, "approved");
    assert_eq!(updated.version, 2);

    assert!(DocumentRepo::delete(&pool, tenant_id, doc.id)
        .await
        .expect("delete should succeed"));
    assert!(DocumentRepo::find_by_id(&pool, tenant_id, doc.id)
        .await
        .expect("find should succeed")
        .is_none());
}

// ---------------------------------------------------------------------------
// Incidents: year_counts aggregate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn year_counts_only_counts_recordable_cases_in_year(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;

    IncidentRepo::create(&pool, tenant_id, &new_incident("Cut", true, true))
        .await
        .expect("create should succeed");
    IncidentRepo::create(&pool, tenant_id, &new_incident("Bruise", true, false))
        .await
        .expect("create should succeed");
    IncidentRepo::create(&pool, tenant_id, &new_incident("Near miss", false, false))
        .await
        .expect("create should succeed");

    // An incident in another year must not count.
    let mut old = new_incident("Old injury", true, true);
    old.occurred_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    IncidentRepo::create(&pool, tenant_id, &old)
        .await
        .expect("create should succeed");

    let counts = IncidentRepo::year_counts(&pool, tenant_id, 2026)
        .await
        .expect("aggregate should succeed");

    assert_eq!(counts.total_recordable_cases, 2);
    assert_eq!(counts.days_away_restricted_transfer_cases, 1);
    assert_eq!(counts.lost_time_cases, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hours_report_upsert_replaces_existing_year(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;

    let first = IncidentRepo::upsert_hours_report(
        &pool,
        tenant_id,
        2026,
        &UpsertHoursReport {
            total_hours_worked: 100_000.0,
            average_employees: 50,
        },
    )
    .await
    .expect("upsert should succeed");

    let second = IncidentRepo::upsert_hours_report(
        &pool,
        tenant_id,
        2026,
        &UpsertHoursReport {
            total_hours_worked: 200_000.0,
            average_employees: 100,
        },
    )
    .await
    .expect("upsert should succeed");

    // Same row, new values.
    assert_eq!(first.id, second.id);
    assert_eq!(second.total_hours_worked, 200_000.0);
    assert_eq!(second.average_employees, 100);
}

// ---------------------------------------------------------------------------
// Risks and aspects: stored scores
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn risk_stores_matrix_score(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;

    let risk = RiskRepo::create(
        &pool,
        tenant_id,
        &CreateRisk {
            title: "Falling objects at loading dock".to_string(),
            category: Some("physical".to_string()),
            probability: 3,
            consequence: 4,
            mitigation: None,
        },
        12,
    )
    .await
    .expect("create should succeed");

    assert_eq!(risk.score, 12);

    // Highest scores sort first.
    let list = RiskRepo::list(&pool, tenant_id).await.expect("list should succeed");
    assert_eq!(list[0].id, risk.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn aspect_stores_significance(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;

    let sig = significance(4, 3, false).expect("valid ratings");
    let aspect = AspectRepo::create(
        &pool,
        tenant_id,
        &nova_db::models::aspect::CreateAspect {
            activity: "Paint shop".to_string(),
            aspect: "VOC emissions".to_string(),
            impact: Some("Air quality".to_string()),
            severity: 4,
            frequency: 3,
            regulatory_requirement: false,
        },
        sig,
    )
    .await
    .expect("create should succeed");

    assert_eq!(aspect.score, 12);
    assert!(aspect.is_significant);
}

// ---------------------------------------------------------------------------
// SDS suggestions: status transitions are one-way
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sds_suggestion_transitions_only_from_suggested(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;
    let chemical = ChemicalRepo::create(
        &pool,
        tenant_id,
        &CreateChemical {
            product_name: "Acetone".to_string(),
            supplier: Some("ChemSupply".to_string()),
            cas_number: Some("67-64-1".to_string()),
            hazard_class: None,
            storage_location: None,
        },
    )
    .await
    .expect("create should succeed");

    let suggestion = SdsSuggestionRepo::create(
        &pool,
        tenant_id,
        chemical.id,
        "acetone.pdf",
        "sds@chemsupply.com",
        "SDS update",
        0.6,
        SDS_SUGGESTED,
    )
    .await
    .expect("create should succeed");

    let confirmed = SdsSuggestionRepo::confirm(&pool, tenant_id, suggestion.id)
        .await
        .expect("confirm should succeed")
        .expect("suggested row should transition");
    assert_eq!(confirmed.status, SDS_CONFIRMED);

    // Already confirmed: a reject is a no-op returning None.
    let rejected = SdsSuggestionRepo::reject(&pool, tenant_id, suggestion.id)
        .await
        .expect("reject should succeed");
    assert!(rejected.is_none());
}

// ---------------------------------------------------------------------------
// Trainings: expiring window
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn expiring_trainings_respect_window(pool: PgPool) {
    use nova_db::models::training::CreateTraining;
    use nova_db::models::user::CreateUser;
    use nova_db::repositories::{TrainingRepo, UserRepo};

    let tenant_id = new_tenant(&pool).await;
    let user = UserRepo::create(
        &pool,
        tenant_id,
        &CreateUser {
            email: "worker@fjord.no".to_string(),
            name: "Test User".to_string(),
            phone: None,
            role: "employee".to_string(),
            password_hash: "unused".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    for (title, days) in [("Forklift license", 10), ("First aid", 200)] {
        TrainingRepo::create(
            &pool,
            tenant_id,
            &CreateTraining {
                user_id: user.id,
                title: title.to_string(),
                completed_at: Some(Utc::now() - Duration::days(300)),
                valid_until: Some(Utc::now() + Duration::days(days)),
            },
        )
        .await
        .expect("create should succeed");
    }

    let expiring = TrainingRepo::list_expiring(&pool, tenant_id, 30)
        .await
        .expect("query should succeed");

    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].title, "Forklift license");
}
