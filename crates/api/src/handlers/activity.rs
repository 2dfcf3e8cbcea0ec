//! Handlers for the activity log. Admin only.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use nova_db::models::activity::ActivityPage;
use nova_db::repositories::ActivityLogRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default page size for activity queries.
const DEFAULT_LIMIT: i64 = 50;
/// Hard cap on page size.
const MAX_LIMIT: i64 = 500;

/// Query parameters for `GET /activity`.
#[derive(Debug, Deserialize)]
pub struct ActivityParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /activity -- page through the tenant's activity log, newest first.
pub async fn query_activity(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<ActivityParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let items = ActivityLogRepo::query(&state.pool, admin.tenant_id, limit, offset).await?;
    let total = ActivityLogRepo::count(&state.pool, admin.tenant_id).await?;

    Ok(Json(DataResponse {
        data: ActivityPage { items, total },
    }))
}
