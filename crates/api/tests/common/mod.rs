//! Shared helpers for API integration tests.
//!
//! Mirrors the production router construction (`router::build_app_router`)
//! so tests exercise the same middleware stack (CORS, request ID, timeout,
//! panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use nova_api::auth::jwt::{generate_access_token, JwtConfig};
use nova_api::auth::password::hash_password;
use nova_api::config::ServerConfig;
use nova_api::router::build_app_router;
use nova_api::state::AppState;
use nova_core::types::DbId;
use nova_db::models::tenant::CreateTenant;
use nova_db::models::user::CreateUser;
use nova_db::repositories::{TenantRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a JSON POST request, optionally with a Bearer token.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::post(uri).header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Issue a JSON PUT request with a Bearer token.
pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::put(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::delete(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the response status, with the body in the failure message.
pub async fn assert_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// A seeded user plus a valid access token for it.
pub struct TestActor {
    pub tenant_id: DbId,
    pub user_id: DbId,
    pub token: String,
}

/// Create a tenant directly through the repository layer.
pub async fn seed_tenant(pool: &PgPool, name: &str) -> DbId {
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

/// Create a user with the given role and mint an access token for it.
pub async fn seed_user(pool: &PgPool, tenant_id: DbId, email: &str, role: &str) -> TestActor {
    let password_hash = hash_password("seeded-test-password").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        tenant_id,
        &CreateUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            phone: None,
            role: role.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, tenant_id, role, &test_config().jwt)
        .expect("token generation should succeed");

    TestActor {
        tenant_id,
        user_id: user.id,
        token,
    }
}
