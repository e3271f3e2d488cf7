use crate::features::locations::models::NewLocation;

/// First result of a forward-geocoding lookup
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl From<&GeocodeMatch> for NewLocation {
    fn from(m: &GeocodeMatch) -> Self {
        Self {
            latitude: m.latitude,
            longitude: m.longitude,
            label: m.label.clone(),
        }
    }
}
