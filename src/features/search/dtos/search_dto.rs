use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::locations::dtos::LocationResponseDto;
use crate::features::search::dtos::MapViewDto;

/// Request DTO for a location search
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchRequestDto {
    /// Free text: an address, city, country or title
    #[validate(length(max = 500, message = "Query must not exceed 500 characters"))]
    pub query: String,
}

/// Stored record plus the map view centered on it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponseDto {
    pub location: LocationResponseDto,
    pub map: MapViewDto,
    /// False when a newer search already moved the map elsewhere
    pub map_updated: bool,
}
