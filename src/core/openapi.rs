use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Search
        search_handlers::search,
        search_handlers::get_map,
        // Locations
        locations_handlers::list_locations,
        locations_handlers::delete_location,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Search
            search_dtos::SearchRequestDto,
            search_dtos::SearchResponseDto,
            search_dtos::MapViewDto,
            search_dtos::MapMarkerDto,
            ApiResponse<search_dtos::SearchResponseDto>,
            ApiResponse<search_dtos::MapViewDto>,
            // Locations
            locations_dtos::LocationResponseDto,
            locations_dtos::DeleteLocationResponseDto,
            ApiResponse<Vec<locations_dtos::LocationResponseDto>>,
            ApiResponse<locations_dtos::DeleteLocationResponseDto>,
        )
    ),
    tags(
        (name = "search", description = "Forward geocoding search and map view"),
        (name = "locations", description = "Persisted list of searched locations"),
    ),
    info(
        title = "Location Search API",
        version = "0.1.0",
        description = "Forward geocoding search with a persisted location list",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
