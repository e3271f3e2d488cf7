use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::config::MapConfig;
use crate::features::search::models::GeocodeMatch;

/// Single labelled marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapMarkerDto {
    /// [latitude, longitude]
    pub position: [f64; 2],
    pub popup: String,
}

/// What the page's map widget needs to render the latest match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapViewDto {
    /// [latitude, longitude]
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub marker: MapMarkerDto,
}

impl MapViewDto {
    /// Map centered on `location` with one marker labelled with its name
    pub fn centered_on(location: &GeocodeMatch, config: &MapConfig) -> Self {
        let position = [location.latitude, location.longitude];
        Self {
            center: position,
            zoom: config.zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            marker: MapMarkerDto {
                position,
                popup: location.label.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_uses_match_coordinates() {
        let paris = GeocodeMatch {
            latitude: 48.8566,
            longitude: 2.3522,
            label: "Paris, France".to_string(),
        };

        let view = MapViewDto::centered_on(&paris, &MapConfig::default());

        assert_eq!(view.center, [48.8566, 2.3522]);
        assert_eq!(view.marker.position, view.center);
        assert_eq!(view.marker.popup, "Paris, France");
        assert_eq!(view.zoom, 13);
        assert!(view.tile_url.contains("tile.openstreetmap.org"));
    }
}
