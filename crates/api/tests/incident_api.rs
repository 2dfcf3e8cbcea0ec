//! Integration tests for incident CRUD, the recordkeeping summary, and
//! tenant isolation.

mod common;

use axum::http::StatusCode;
use common::{assert_status, delete_auth, get_auth, post_json, put_json, seed_tenant, seed_user};
use nova_core::roles::ROLE_HSE_MANAGER;
use serde_json::json;
use sqlx::PgPool;

fn incident_body(title: &str, recordable: bool, days_away: bool) -> serde_json::Value {
    json!({
        "title": title,
        "occurred_at": "2026-03-15T10:30:00Z",
        "incident_type": "injury",
        "severity": 3,
        "recordable": recordable,
        "days_away": days_away,
    })
}

// ---------------------------------------------------------------------------
// CRUD round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn incident_crud_round_trip(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let manager = seed_user(&pool, tenant_id, "hse@fjord.no", ROLE_HSE_MANAGER).await;

    // Create.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/incidents",
        Some(&manager.token),
        incident_body("Forklift near miss", false, false),
    )
    .await;
    let json = assert_status(response, StatusCode::CREATED).await;
    let id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["status"], "open");

    // Get.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/incidents/{id}"), &manager.token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["title"], "Forklift near miss");

    // Update.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/incidents/{id}"),
        &manager.token,
        json!({"status": "closed"}),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "closed");
    // Untouched fields survive the partial update.
    assert_eq!(json["data"]["title"], "Forklift near miss");

    // Delete.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/incidents/{id}"), &manager.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/incidents/{id}"), &manager.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Recordkeeping summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn recordkeeping_summary_computes_osha_rates(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let manager = seed_user(&pool, tenant_id, "hse@fjord.no", ROLE_HSE_MANAGER).await;

    // Two recordable cases (one with days away), one non-recordable.
    for body in [
        incident_body("Laceration", true, true),
        incident_body("Sprained ankle", true, false),
        incident_body("Near miss", false, false),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/incidents", Some(&manager.token), body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // No hours report yet: counts are present, rates are null.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/incidents/recordkeeping?year=2026", &manager.token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["total_recordable_cases"], 2);
    assert_eq!(json["data"]["days_away_restricted_transfer_cases"], 1);
    assert_eq!(json["data"]["lost_time_cases"], 1);
    assert!(json["data"]["trir"].is_null());

    // File the hours report: 200,000 hours makes TRIR equal the case count.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/incidents/hours/2026",
        &manager.token,
        json!({"total_hours_worked": 200000.0, "average_employees": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/incidents/recordkeeping?year=2026", &manager.token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["trir"], 2.0);
    assert_eq!(json["data"]["dart"], 1.0);
    assert_eq!(json["data"]["ltir"], 1.0);
    assert_eq!(json["data"]["total_hours_worked"], 200000.0);
    assert_eq!(json["data"]["average_employees"], 100);
}

// ---------------------------------------------------------------------------
// Tenant isolation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn tenants_cannot_see_each_others_incidents(pool: PgPool) {
    let tenant_a = seed_tenant(&pool, "Tenant A").await;
    let tenant_b = seed_tenant(&pool, "Tenant B").await;
    let manager_a = seed_user(&pool, tenant_a, "a@tenant-a.no", ROLE_HSE_MANAGER).await;
    let manager_b = seed_user(&pool, tenant_b, "b@tenant-b.no", ROLE_HSE_MANAGER).await;

    // Tenant A files an incident.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/incidents",
        Some(&manager_a.token),
        incident_body("Tenant A incident", true, false),
    )
    .await;
    let json = assert_status(response, StatusCode::CREATED).await;
    let id = json["data"]["id"].as_i64().unwrap();

    // Tenant B cannot fetch it by id.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/incidents/{id}"), &manager_b.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Tenant B's list is empty.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/incidents", &manager_b.token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // Tenant B cannot delete it either.
    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/incidents/{id}"), &manager_b.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
