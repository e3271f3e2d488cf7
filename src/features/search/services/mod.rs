mod geocoding_service;
mod search_service;

pub use geocoding_service::{Geocoder, GeocodingService};
pub use search_service::SearchService;
