//! Forward-geocoding search and the map view of its latest result.
//!
//! A search resolves free text through the geocoding provider, appends the
//! first match to the location list and recenters the map view on it. The
//! provider credential stays inside this service.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/search` | No | Geocode a query and store the first match |
//! | GET | `/api/map` | No | Map view centered on the latest match |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{Geocoder, GeocodingService, SearchService};
