use std::sync::Arc;

use axum::{routing::delete, routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationStore;

/// Create routes for the locations feature
pub fn routes(store: Arc<LocationStore>) -> Router {
    Router::new()
        .route("/api/locations", get(handlers::list_locations))
        .route("/api/locations/{id}", delete(handlers::delete_location))
        .with_state(store)
}
