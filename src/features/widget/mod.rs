//! Server-rendered search page.
//!
//! The page holds the search box, the map of the latest match (Leaflet) and
//! the table of stored locations with a delete button per row. It talks to
//! the JSON API and shows every error message in an alert.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Search page |

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::PageService;
