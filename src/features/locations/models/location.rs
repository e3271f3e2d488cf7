use serde::{Deserialize, Serialize};

use crate::features::locations::dtos::LocationResponseDto;

/// Persisted location record.
///
/// The serialized field names are part of the storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Location data before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl LocationRecord {
    pub fn new(id: i64, location: NewLocation) -> Self {
        Self {
            id,
            latitude: location.latitude,
            longitude: location.longitude,
            label: location.label,
        }
    }
}

impl From<LocationRecord> for LocationResponseDto {
    fn from(r: LocationRecord) -> Self {
        Self {
            id: r.id,
            latitude: r.latitude,
            longitude: r.longitude,
            label: r.label,
        }
    }
}
