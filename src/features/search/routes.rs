use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::search::handlers;
use crate::features::search::services::SearchService;

/// Create routes for the search feature
pub fn routes(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/api/search", post(handlers::search))
        .route("/api/map", get(handlers::get_map))
        .with_state(service)
}
