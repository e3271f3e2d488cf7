use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{LocationRecord, NewLocation};
use crate::modules::storage::{KeyValueStore, StorageError};

/// Serialize the full list into its stored form
pub fn encode_list(records: &[LocationRecord]) -> std::result::Result<String, StorageError> {
    serde_json::to_string(records).map_err(|e| StorageError::Encode(e.to_string()))
}

/// Parse a stored list
pub fn decode_list(raw: &str) -> std::result::Result<Vec<LocationRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

struct ListState {
    records: Vec<LocationRecord>,
    /// Largest id handed out so far
    last_id: i64,
}

impl ListState {
    fn new(records: Vec<LocationRecord>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self { records, last_id }
    }

    /// Millisecond timestamp, bumped past the previous id when the clock
    /// has not advanced (or went backwards).
    fn next_id(&mut self) -> Result<i64> {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last_id {
            now
        } else {
            self.last_id.checked_add(1).ok_or_else(|| {
                AppError::Internal(format!(
                    "No location id left after {}, delete the record to continue",
                    self.last_id
                ))
            })?
        };
        self.last_id = id;
        Ok(id)
    }
}

/// In-memory location list mirrored into a key-value store.
///
/// The list is loaded once on construction. Every mutation rewrites the
/// whole list under `key`; when that write fails the mutation is undone, so
/// the stored value always equals the in-memory list.
pub struct LocationStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    state: Mutex<ListState>,
}

impl LocationStore {
    /// Load the list stored under `key`.
    ///
    /// Missing, unreadable or malformed data yields an empty list.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let records = match store.get(&key).await {
            Ok(Some(raw)) => match decode_list(&raw) {
                Ok(records) => dedupe_by_id(records),
                Err(e) => {
                    tracing::warn!(
                        "Stored location list under '{}' is malformed, starting empty: {}",
                        key,
                        e
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read location list under '{}', starting empty: {}",
                    key,
                    e
                );
                Vec::new()
            }
        };

        tracing::info!("Location list loaded: {} record(s)", records.len());

        Self {
            store,
            key,
            state: Mutex::new(ListState::new(records)),
        }
    }

    /// Snapshot of the list in insertion order
    pub async fn list(&self) -> Vec<LocationRecord> {
        self.state.lock().await.records.clone()
    }

    /// Append a new record at the end of the list and persist
    pub async fn append(&self, location: NewLocation) -> Result<LocationRecord> {
        let mut state = self.state.lock().await;

        let id = state.next_id()?;
        let record = LocationRecord::new(id, location);
        state.records.push(record.clone());

        if let Err(e) = self.persist(&state.records).await {
            state.records.pop();
            return Err(e.into());
        }

        tracing::info!(
            "Location appended: id={}, label={:?}",
            record.id,
            record.label
        );

        Ok(record)
    }

    /// Remove the record with `id` and persist.
    ///
    /// Returns `false` without touching the store when no record matches.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().await;

        let Some(index) = state.records.iter().position(|r| r.id == id) else {
            tracing::debug!("Delete of unknown location id={} ignored", id);
            return Ok(false);
        };

        let removed = state.records.remove(index);

        if let Err(e) = self.persist(&state.records).await {
            state.records.insert(index, removed);
            return Err(e.into());
        }

        tracing::info!("Location deleted: id={}", id);
        Ok(true)
    }

    async fn persist(&self, records: &[LocationRecord]) -> std::result::Result<(), StorageError> {
        let encoded = encode_list(records)?;
        self.store.set(&self.key, encoded).await.map_err(|e| {
            tracing::error!("Failed to persist location list: {:?}", e);
            e
        })
    }
}

fn dedupe_by_id(records: Vec<LocationRecord>) -> Vec<LocationRecord> {
    let mut seen = HashSet::new();
    let total = records.len();
    let unique: Vec<LocationRecord> = records.into_iter().filter(|r| seen.insert(r.id)).collect();

    if unique.len() != total {
        tracing::warn!(
            "Dropped {} stored location(s) with duplicate ids",
            total - unique.len()
        );
    }

    unique
}
