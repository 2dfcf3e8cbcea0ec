//! Integration tests for the SDS inbox matching flow.

mod common;

use axum::http::StatusCode;
use common::{assert_status, get_auth, post_json, seed_tenant, seed_user};
use nova_core::roles::ROLE_HSE_MANAGER;
use serde_json::json;
use sqlx::PgPool;

async fn seed_chemical(app: axum::Router, token: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/chemicals",
        Some(token),
        json!({
            "product_name": "Acetone",
            "supplier": "ChemSupply",
            "cas_number": "67-64-1",
            "hazard_class": "Flammable liquid",
        }),
    )
    .await;
    let json = assert_status(response, StatusCode::CREATED).await;
    json["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Auto-apply
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn strong_filename_match_is_auto_applied(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let manager = seed_user(&pool, tenant_id, "hse@fjord.no", ROLE_HSE_MANAGER).await;
    let chemical_id = seed_chemical(common::build_test_app(pool.clone()), &manager.token).await;

    // Product name + CAS (hyphens stripped) in the filename: 0.6 + 0.8 = 1.4.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/chemicals/sds-inbox",
        Some(&manager.token),
        json!({
            "sender": "orders@example.com",
            "subject": "Documents",
            "attachments": [
                {"filename": "Acetone_SDS_67641.pdf"},
                {"filename": "invoice_march.pdf"},
            ],
        }),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;

    let suggestions = json["data"]["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["status"], "auto_applied");
    assert_eq!(suggestions[0]["chemical_id"], chemical_id);
    assert!(suggestions[0]["confidence"].as_f64().unwrap() >= 1.4);
    // The unrelated attachment matched nothing.
    assert_eq!(json["data"]["discarded"], 1);

    // The chemical's SDS revision date was stamped.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/chemicals/{chemical_id}"), &manager.token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert!(json["data"]["sds_revision_date"].is_string());
}

// ---------------------------------------------------------------------------
// Suggestion + confirmation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn supplier_only_match_needs_confirmation(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let manager = seed_user(&pool, tenant_id, "hse@fjord.no", ROLE_HSE_MANAGER).await;
    seed_chemical(common::build_test_app(pool.clone()), &manager.token).await;

    // Supplier in sender and subject only: 0.5 + 0.3 = 0.8, which is a
    // suggestion, not an auto-apply.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/chemicals/sds-inbox",
        Some(&manager.token),
        json!({
            "sender": "sds@chemsupply.com",
            "subject": "ChemSupply safety documentation",
            "attachments": [{"filename": "datasheet.pdf"}],
        }),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    let suggestions = json["data"]["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["status"], "suggested");
    let suggestion_id = suggestions[0]["id"].as_i64().unwrap();

    // Confirm it.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/chemicals/sds-suggestions/{suggestion_id}/confirm"),
        Some(&manager.token),
        json!({}),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "confirmed");

    // A confirmed suggestion cannot be rejected afterwards.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/chemicals/sds-suggestions/{suggestion_id}/reject"),
        Some(&manager.token),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
