//! Persisted list of searched locations.
//!
//! Every successful search appends a record; records can be deleted one by
//! one. The list is mirrored into the key-value store after each mutation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/locations` | No | List stored locations in insertion order |
//! | DELETE | `/api/locations/{id}` | No | Delete a location (no-op if absent) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationStore;
