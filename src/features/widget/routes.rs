use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::widget::handlers;
use crate::features::widget::services::PageService;

/// Create routes for the search page
pub fn routes(service: Arc<PageService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GeocodingConfig, MapConfig};
    use crate::features::locations::LocationStore;
    use crate::features::search::{GeocodingService, SearchService};
    use crate::modules::storage::MemoryKeyValueStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_serves_html() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let locations = Arc::new(LocationStore::load(kv, "toDoList").await);
        let geocoder = GeocodingService::new(&GeocodingConfig {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            access_key: "page-test-key".to_string(),
            timeout: None,
        })
        .unwrap();
        let search = Arc::new(SearchService::new(
            Arc::new(geocoder),
            Arc::clone(&locations),
            MapConfig::default(),
        ));
        let page = Arc::new(
            PageService::new(locations, search, "Location Search".to_string()).unwrap(),
        );

        let response = routes(page)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Search by title/city/country..."));
        assert!(!html.contains("page-test-key"));
    }
}
