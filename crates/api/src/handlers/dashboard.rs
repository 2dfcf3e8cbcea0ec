//! Handler for the tenant dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use nova_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /dashboard/summary -- aggregate counts for the landing page.
pub async fn summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let summary = DashboardRepo::summary(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: summary }))
}
