//! Route definitions for the chemical inventory and SDS inbox.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chemical;
use crate::state::AppState;

/// Routes mounted at `/chemicals`.
///
/// ```text
/// GET    /                               -> list_chemicals
/// POST   /                               -> create_chemical
/// POST   /sds-inbox                      -> process_sds_inbox
/// GET    /sds-suggestions                -> list_sds_suggestions
/// POST   /sds-suggestions/{id}/confirm   -> confirm_sds_suggestion
/// POST   /sds-suggestions/{id}/reject    -> reject_sds_suggestion
/// GET    /{id}                           -> get_chemical
/// PUT    /{id}                           -> update_chemical
/// DELETE /{id}                           -> delete_chemical
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(chemical::list_chemicals).post(chemical::create_chemical))
        .route("/sds-inbox", post(chemical::process_sds_inbox))
        .route("/sds-suggestions", get(chemical::list_sds_suggestions))
        .route(
            "/sds-suggestions/{id}/confirm",
            post(chemical::confirm_sds_suggestion),
        )
        .route(
            "/sds-suggestions/{id}/reject",
            post(chemical::reject_sds_suggestion),
        )
        .route(
            "/{id}",
            get(chemical::get_chemical)
                .put(chemical::update_chemical)
                .delete(chemical::delete_chemical),
        )
}
