//! Route definitions for controlled documents.

use axum::routing::get;
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/documents`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(document::list_documents).post(document::create_document))
        .route(
            "/{id}",
            get(document::get_document)
                .put(document::update_document)
                .delete(document::delete_document),
        )
}
