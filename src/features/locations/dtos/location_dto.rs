use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored location as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    /// Creation timestamp in milliseconds, unique per record
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Result of a delete request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteLocationResponseDto {
    pub id: i64,
    /// False when no record had this id
    pub deleted: bool,
}
