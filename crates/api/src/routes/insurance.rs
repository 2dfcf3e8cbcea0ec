//! Route definitions for insurance policies.

use axum::routing::get;
use axum::Router;

use crate::handlers::insurance;
use crate::state::AppState;

/// Routes mounted at `/insurance`.
///
/// ```text
/// GET    /           -> list_policies
/// POST   /           -> create_policy
/// GET    /expiring   -> list_expiring_policies
/// GET    /{id}       -> get_policy
/// PUT    /{id}       -> update_policy
/// DELETE /{id}       -> delete_policy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(insurance::list_policies).post(insurance::create_policy))
        .route("/expiring", get(insurance::list_expiring_policies))
        .route(
            "/{id}",
            get(insurance::get_policy)
                .put(insurance::update_policy)
                .delete(insurance::delete_policy),
        )
}
