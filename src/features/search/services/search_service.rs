use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};
use crate::features::locations::models::NewLocation;
use crate::features::locations::LocationStore;
use crate::features::search::dtos::{MapViewDto, SearchResponseDto};
use crate::features::search::models::GeocodeMatch;
use crate::features::search::services::Geocoder;
use crate::shared::constants::{MSG_EMPTY_QUERY, MSG_NO_RESULTS};

/// Runs searches: validate, geocode, store the first match and keep it as
/// the current map view.
///
/// Every successful lookup is appended to the location list. The map view
/// only moves forward: each search takes a generation number before calling
/// the provider, and a result never replaces one from a later search.
pub struct SearchService {
    geocoder: Arc<dyn Geocoder>,
    locations: Arc<LocationStore>,
    map_config: MapConfig,
    generation: AtomicU64,
    /// Generation and match currently shown on the map
    latest: RwLock<Option<(u64, GeocodeMatch)>>,
}

impl SearchService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        locations: Arc<LocationStore>,
        map_config: MapConfig,
    ) -> Self {
        Self {
            geocoder,
            locations,
            map_config,
            generation: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    /// Search `query` and append its first match to the location list
    pub async fn search(&self, query: &str) -> Result<SearchResponseDto> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::Validation(MSG_EMPTY_QUERY.to_string()));
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Search #{} started: {:?}", generation, query);

        let found = self.geocoder.forward(query).await?.ok_or_else(|| {
            tracing::info!("Search #{} found no location", generation);
            AppError::NotFound(MSG_NO_RESULTS.to_string())
        })?;

        let record = self.locations.append(NewLocation::from(&found)).await?;
        let map = MapViewDto::centered_on(&found, &self.map_config);

        let mut latest = self.latest.write().await;
        let map_updated = match latest.as_ref() {
            Some((shown, _)) => *shown < generation,
            None => true,
        };

        if map_updated {
            *latest = Some((generation, found));
        } else {
            tracing::info!(
                "Search #{} finished after a newer result, map left unchanged",
                generation
            );
        }

        Ok(SearchResponseDto {
            location: record.into(),
            map,
            map_updated,
        })
    }

    /// Map view of the latest successful search, if there was one
    pub async fn current_map(&self) -> Option<MapViewDto> {
        self.latest
            .read()
            .await
            .as_ref()
            .map(|(_, found)| MapViewDto::centered_on(found, &self.map_config))
    }
}
