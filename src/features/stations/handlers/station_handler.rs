use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::stations::dtos::{CreateStationDto, StationResponseDto};
use crate::features::stations::services::StationService;
use crate::shared::types::ApiResponse;

/// Create a station (admin)
#[utoipa::path(
    post,
    path = "/stations",
    request_body = CreateStationDto,
    responses(
        (status = 200, description = "Station created", body = ApiResponse<StationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "District not found")
    ),
    tag = "stations"
)]
pub async fn create_station(
    State(service): State<Arc<StationService>>,
    AppJson(dto): AppJson<CreateStationDto>,
) -> Result<Json<ApiResponse<StationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let station = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(station.into()), None, None)))
}

/// Delete a station (admin)
#[utoipa::path(
    delete,
    path = "/stations/{id}",
    params(
        ("id" = i32, Path, description = "Station id")
    ),
    responses(
        (status = 200, description = "Station deleted"),
        (status = 404, description = "Station not found")
    ),
    tag = "stations"
)]
pub async fn delete_station(
    State(service): State<Arc<StationService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Station deleted".to_string()),
        None,
    )))
}

/// List stations in a district
#[utoipa::path(
    get,
    path = "/districts/{id}/stations",
    params(
        ("id" = i32, Path, description = "District id")
    ),
    responses(
        (status = 200, description = "Stations in the district", body = ApiResponse<Vec<StationResponseDto>>),
        (status = 404, description = "District not found")
    ),
    tag = "stations"
)]
pub async fn list_stations_by_district(
    State(service): State<Arc<StationService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<StationResponseDto>>>> {
    let stations = service.list_by_district(id).await?;
    let dtos: Vec<StationResponseDto> = stations.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
