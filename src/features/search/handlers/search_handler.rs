use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::search::dtos::{MapViewDto, SearchRequestDto, SearchResponseDto};
use crate::features::search::services::SearchService;
use crate::shared::constants::MSG_EMPTY_QUERY;
use crate::shared::types::ApiResponse;

/// Search a location
///
/// Geocodes the query, stores the first match in the location list and
/// centers the map view on it. Error messages are meant to be shown to the
/// user as-is.
#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequestDto,
    responses(
        (status = 201, description = "Location found and stored", body = ApiResponse<SearchResponseDto>),
        (status = 400, description = "Empty or invalid query"),
        (status = 404, description = "No location data found"),
        (status = 502, description = "Geocoding provider unavailable")
    ),
    tag = "search"
)]
pub async fn search(
    State(service): State<Arc<SearchService>>,
    AppJson(dto): AppJson<SearchRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<SearchResponseDto>>)> {
    if dto.query.trim().is_empty() {
        return Err(AppError::Validation(MSG_EMPTY_QUERY.to_string()));
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.search(&dto.query).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(result), None, None)),
    ))
}

/// Get the current map view
///
/// Only available once a search has succeeded.
#[utoipa::path(
    get,
    path = "/api/map",
    responses(
        (status = 200, description = "Map view of the latest search", body = ApiResponse<MapViewDto>),
        (status = 404, description = "No search result to show yet")
    ),
    tag = "search"
)]
pub async fn get_map(
    State(service): State<Arc<SearchService>>,
) -> Result<Json<ApiResponse<MapViewDto>>> {
    let map = service
        .current_map()
        .await
        .ok_or_else(|| AppError::NotFound("No search result to show yet".to_string()))?;

    Ok(Json(ApiResponse::success(Some(map), None, None)))
}
