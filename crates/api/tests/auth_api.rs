//! Integration tests for registration, login, refresh, and RBAC.

mod common;

use axum::http::StatusCode;
use common::{assert_status, post_json, seed_tenant, seed_user};
use nova_core::roles::{ROLE_EMPLOYEE, ROLE_HSE_MANAGER};
use serde_json::json;
use sqlx::PgPool;

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "company_name": "Fjord Fabrication AS",
        "org_number": "987654321",
        "country": "NO",
        "email": email,
        "name": "Kari Nordmann",
        "password": "a-long-enough-password",
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_tenant_and_admin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/register", None, register_body("kari@fjord.no")).await;
    let json = assert_status(response, StatusCode::CREATED).await;

    assert!(json["data"]["access_token"].is_string());
    assert!(json["data"]["refresh_token"].is_string());
    assert_eq!(json["data"]["user"]["email"], "kari@fjord.no");
    assert_eq!(json["data"]["user"]["role"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = register_body("kari@fjord.no");
    body["password"] = json!("short");
    let response = post_json(app, "/api/v1/auth/register", None, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/register", None, register_body("kari@fjord.no")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let mut body = register_body("kari@fjord.no");
    body["company_name"] = json!("Another Company");
    let response = post_json(app, "/api/v1/auth/register", None, body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Login and refresh
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_and_refresh_flow(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/register", None, register_body("kari@fjord.no")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Correct credentials succeed.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        json!({"email": "kari@fjord.no", "password": "a-long-enough-password"}),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    let refresh_token = json["data"]["refresh_token"].as_str().unwrap().to_string();

    // The refresh token exchanges for a fresh pair.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        json!({"refresh_token": refresh_token}),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert!(json["data"]["access_token"].is_string());

    // Rotation: the used refresh token is now invalid.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password_fails(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/register", None, register_body("kari@fjord.no")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        json!({"email": "kari@fjord.no", "password": "wrong-password-entirely"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_cannot_mutate_records(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let employee = seed_user(&pool, tenant_id, "worker@fjord.no", ROLE_EMPLOYEE).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/incidents",
        Some(&employee.token),
        json!({
            "title": "Slipped on wet floor",
            "occurred_at": "2026-02-01T08:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manager_can_mutate_records(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let manager = seed_user(&pool, tenant_id, "hse@fjord.no", ROLE_HSE_MANAGER).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/incidents",
        Some(&manager.token),
        json!({
            "title": "Slipped on wet floor",
            "occurred_at": "2026-02-01T08:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_cannot_list_users(pool: PgPool) {
    let tenant_id = seed_tenant(&pool, "Fjord Fabrication AS").await;
    let employee = seed_user(&pool, tenant_id, "worker@fjord.no", ROLE_EMPLOYEE).await;

    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/users", &employee.token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
