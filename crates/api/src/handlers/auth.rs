//! Handlers for registration, login, token refresh, and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use nova_core::error::CoreError;
use nova_core::roles::ROLE_ADMIN;
use nova_db::models::tenant::CreateTenant;
use nova_db::models::user::{CreateUser, User, UserResponse};
use nova_db::repositories::{SessionRepo, TenantRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Failed logins before the account is temporarily locked.
const MAX_FAILED_LOGINS: i32 = 5;
/// How long a lockout lasts.
const LOCKOUT_MINUTES: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for `POST /auth/register`: a new tenant plus its first admin user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: String,
    pub org_number: Option<String>,
    pub country: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub password: String,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair plus the authenticated user, returned by register/login/refresh.
#[derive(Debug, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue an access/refresh token pair and persist the refresh session.
async fn issue_tokens(state: &AppState, user: &User) -> AppResult<AuthTokens> {
    let access_token = generate_access_token(user.id, user.tenant_id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    Ok(AuthTokens {
        access_token,
        refresh_token,
        user: UserResponse::from(user.clone()),
    })
}

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Self-service signup: creates a tenant and its first user with the
/// `admin` role, then returns a token pair.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let tenant = TenantRepo::create(
        &state.pool,
        &CreateTenant {
            name: input.company_name.clone(),
            org_number: input.org_number.clone(),
            country: input.country.clone(),
        },
    )
    .await?;

    let create_user = CreateUser {
        email: input.email.clone(),
        name: input.name.clone(),
        phone: None,
        role: ROLE_ADMIN.to_string(),
        password_hash,
    };

    let user = match UserRepo::create(&state.pool, tenant.id, &create_user).await {
        Ok(user) => user,
        Err(e) => {
            // Roll back the tenant so a duplicate email does not leave an
            // empty organization behind.
            if let Err(cleanup) = TenantRepo::delete(&state.pool, tenant.id).await {
                tracing::error!(tenant_id = tenant.id, error = %cleanup, "Failed to roll back tenant after user creation error");
            }
            return Err(e.into());
        }
    };

    tracing::info!(tenant_id = tenant.id, user_id = user.id, "Tenant registered");

    let tokens = issue_tokens(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tokens })))
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// POST /auth/login
///
/// Verifies credentials and returns a token pair. Repeated failures lock
/// the account for a cool-down period.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Account is temporarily locked".into(),
            )));
        }
    }

    let password_ok = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if !password_ok {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if user.failed_login_count + 1 >= MAX_FAILED_LOGINS {
            let until = Utc::now() + Duration::minutes(LOCKOUT_MINUTES);
            UserRepo::lock_account(&state.pool, user.id, until).await?;
            tracing::warn!(user_id = user.id, "Account locked after repeated failed logins");
        }
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let tokens = issue_tokens(&state, &user).await?;
    Ok(Json(DataResponse { data: tokens }))
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

/// POST /auth/refresh
///
/// Exchanges a valid refresh token for a new token pair. The presented
/// token is revoked (single-use rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_valid_by_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_any(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Account is deactivated".into())))?;

    SessionRepo::revoke_by_hash(&state.pool, &hash).await?;

    let tokens = issue_tokens(&state, &user).await?;
    Ok(Json(DataResponse { data: tokens }))
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// POST /auth/logout
///
/// Revokes the presented refresh token. The access token simply expires.
pub async fn logout(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let hash = hash_refresh_token(&input.refresh_token);
    let revoked = SessionRepo::revoke_by_hash(&state.pool, &hash).await?;
    Ok(Json(DataResponse { data: revoked }))
}
