//! Route definitions for workers' compensation claims.

use axum::routing::get;
use axum::Router;

use crate::handlers::claim;
use crate::state::AppState;

/// Routes mounted at `/claims`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(claim::list_claims).post(claim::create_claim))
        .route(
            "/{id}",
            get(claim::get_claim).put(claim::update_claim).delete(claim::delete_claim),
        )
}
