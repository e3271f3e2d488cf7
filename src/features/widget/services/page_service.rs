use std::sync::Arc;

use minijinja::{context, Environment};

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::LocationResponseDto;
use crate::features::locations::LocationStore;
use crate::features::search::SearchService;
use crate::shared::constants::{MSG_EMPTY_QUERY, MSG_FETCH_FAILED};

const INDEX_TEMPLATE: &str = "widget/index.html";

/// Renders the search page from the current list and map view
pub struct PageService {
    env: Environment<'static>,
    locations: Arc<LocationStore>,
    search: Arc<SearchService>,
    title: String,
}

impl PageService {
    pub fn new(
        locations: Arc<LocationStore>,
        search: Arc<SearchService>,
        title: String,
    ) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(
            INDEX_TEMPLATE,
            include_str!("../../../../templates/widget/index.html.jinja"),
        )
        .map_err(|e| AppError::Internal(format!("Failed to load page template: {}", e)))?;

        Ok(Self {
            env,
            locations,
            search,
            title,
        })
    }

    pub async fn render_index(&self) -> Result<String> {
        let locations: Vec<LocationResponseDto> = self
            .locations
            .list()
            .await
            .into_iter()
            .map(Into::into)
            .collect();
        let map = self.search.current_map().await;

        let template = self
            .env
            .get_template(INDEX_TEMPLATE)
            .map_err(|e| AppError::Internal(format!("Page template missing: {}", e)))?;

        template
            .render(context! {
                title => &self.title,
                locations => locations,
                map => map,
                empty_query_message => MSG_EMPTY_QUERY,
                fetch_failed_message => MSG_FETCH_FAILED,
            })
            .map_err(|e| AppError::Internal(format!("Failed to render page: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MapConfig;
    use crate::features::search::models::GeocodeMatch;
    use crate::features::search::Geocoder;
    use crate::modules::storage::MemoryKeyValueStore;
    use async_trait::async_trait;

    struct Fixed;

    #[async_trait]
    impl Geocoder for Fixed {
        async fn forward(&self, _query: &str) -> Result<Option<GeocodeMatch>> {
            Ok(Some(GeocodeMatch {
                latitude: 48.8566,
                longitude: 2.3522,
                label: "Paris <France>".to_string(),
            }))
        }
    }

    async fn setup() -> (PageService, Arc<SearchService>) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let locations = Arc::new(LocationStore::load(kv, "toDoList").await);
        let search = Arc::new(SearchService::new(
            Arc::new(Fixed),
            Arc::clone(&locations),
            MapConfig::default(),
        ));
        let page = PageService::new(locations, Arc::clone(&search), "Location Search".to_string())
            .unwrap();
        (page, search)
    }

    #[tokio::test]
    async fn test_page_without_search_has_no_map() {
        let (page, _) = setup().await;

        let html = page.render_index().await.unwrap();

        assert!(html.contains("<h1>Location Search</h1>"));
        assert!(!html.contains("id=\"map\""));
        assert!(html.contains("Please enter a valid address!"));
    }

    #[tokio::test]
    async fn test_page_after_search_shows_map_and_escaped_row() {
        let (page, search) = setup().await;
        let result = search.search("Paris").await.unwrap();

        let html = page.render_index().await.unwrap();

        assert!(html.contains("id=\"map\""));
        assert!(html.contains("<strong>Paris &lt;France&gt;</strong>"));
        assert!(html.contains(&format!("data-id=\"{}\"", result.location.id)));
        assert!(html.contains("Lat: 48.8566"));
        assert!(!html.contains("Paris <France>"));
    }
}
