use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::locations::dtos::{DeleteLocationResponseDto, LocationResponseDto};
use crate::features::locations::services::LocationStore;
use crate::shared::types::{ApiResponse, Meta};

/// List stored locations
///
/// Returns every stored location in insertion order.
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "Stored locations", body = ApiResponse<Vec<LocationResponseDto>>),
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(store): State<Arc<LocationStore>>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let locations: Vec<LocationResponseDto> =
        store.list().await.into_iter().map(Into::into).collect();
    let total = locations.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(locations),
        None,
        Some(Meta { total }),
    )))
}

/// Delete a stored location
///
/// Deleting an id that does not exist leaves the list untouched and reports
/// `deleted: false`.
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Delete processed", body = ApiResponse<DeleteLocationResponseDto>),
        (status = 400, description = "Invalid id")
    ),
    tag = "locations"
)]
pub async fn delete_location(
    State(store): State<Arc<LocationStore>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeleteLocationResponseDto>>> {
    let deleted = store.delete(id).await?;
    let message = if deleted {
        "Location deleted"
    } else {
        "Location not found, nothing deleted"
    };

    Ok(Json(ApiResponse::success(
        Some(DeleteLocationResponseDto { id, deleted }),
        Some(message.to_string()),
        None,
    )))
}
