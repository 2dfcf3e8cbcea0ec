//! Handlers for user administration, own profile, and notification
//! preferences.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::roles::{ROLE_ADMIN, ROLE_EMPLOYEE, ROLE_HSE_MANAGER};
use nova_core::types::DbId;
use nova_db::models::user::{CreateUser, UpdateNotificationSettings, UpdateUser, UserResponse};
use nova_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /users`. The plaintext password never reaches the
/// database layer; it is hashed here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub password: String,
}

/// Reject role strings outside the known set before they hit the DB CHECK
/// constraint, so the client gets a 400 instead of a 500.
fn validate_role(role: &str) -> AppResult<()> {
    if role != ROLE_ADMIN && role != ROLE_HSE_MANAGER && role != ROLE_EMPLOYEE {
        return Err(AppError::BadRequest(format!("Unknown role: {role}")));
    }
    Ok(())
}

/// GET /users -- list the tenant's users. Admin only.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool, admin.tenant_id).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data: users }))
}

/// POST /users -- create a user in the tenant. Admin only.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let role = input.role.unwrap_or_else(|| ROLE_EMPLOYEE.to_string());
    validate_role(&role)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        admin.tenant_id,
        &CreateUser {
            email: input.email,
            name: input.name,
            phone: input.phone,
            role,
            password_hash,
        },
    )
    .await?;

    log_activity(&state, admin.tenant_id, admin.user_id, "user.created", "user", user.id).await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /users/{id} -- fetch one user. Admin only.
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, admin.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// PUT /users/{id} -- update a user. Admin only.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    if let Some(role) = &input.role {
        validate_role(role)?;
    }

    let user = UserRepo::update(&state.pool, admin.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;

    log_activity(&state, admin.tenant_id, admin.user_id, "user.updated", "user", id).await;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// DELETE /users/{id} -- deactivate a user and revoke their sessions.
/// Admin only. Deactivation rather than hard delete keeps the audit trail
/// and historical records (trainings, incidents) intact.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if id == admin.user_id {
        return Err(AppError::BadRequest(
            "Cannot deactivate your own account".into(),
        ));
    }

    let deactivated = UserRepo::deactivate(&state.pool, admin.tenant_id, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "user", id }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    log_activity(&state, admin.tenant_id, admin.user_id, "user.deactivated", "user", id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/me -- the authenticated user's own profile.
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let row = UserRepo::find_by_id(&state.pool, user.tenant_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(row),
    }))
}

/// GET /users/me/notifications -- own reminder preferences.
pub async fn get_notification_settings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let settings = UserRepo::get_notification_settings(&state.pool, user.tenant_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /users/me/notifications -- update own reminder preferences.
pub async fn update_notification_settings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<UpdateNotificationSettings>,
) -> AppResult<impl IntoResponse> {
    if let Some(days) = input.reminder_days_before {
        if days < 0 {
            return Err(AppError::BadRequest(
                "reminder_days_before must be non-negative".into(),
            ));
        }
    }

    let settings =
        UserRepo::update_notification_settings(&state.pool, user.tenant_id, user.user_id, &input)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "user",
                id: user.user_id,
            }))?;
    Ok(Json(DataResponse { data: settings }))
}
