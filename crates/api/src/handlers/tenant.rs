//! Handlers for the current tenant.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_db::models::tenant::UpdateTenant;
use nova_db::repositories::TenantRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tenant -- the authenticated user's organization.
pub async fn get_tenant(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let tenant = TenantRepo::find_by_id(&state.pool, user.tenant_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "tenant",
            id: user.tenant_id,
        }))?;
    Ok(Json(DataResponse { data: tenant }))
}

/// PUT /tenant -- update organization details. Admin only.
pub async fn update_tenant(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Json(input): Json<UpdateTenant>,
) -> AppResult<impl IntoResponse> {
    let tenant = TenantRepo::update(&state.pool, user.tenant_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "tenant",
            id: user.tenant_id,
        }))?;
    Ok(Json(DataResponse { data: tenant }))
}
