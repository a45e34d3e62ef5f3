use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::households::dtos::{
    CreateHouseholdDto, HouseholdApplicationDto, HouseholdResponseDto, HouseholdWithStationDto,
    PendingHouseholdDto,
};
use crate::features::households::services::HouseholdService;
use crate::features::stations::dtos::{NearestStationDto, RadiusQuery};
use crate::shared::constants::DEFAULT_SEARCH_RADIUS_KM;
use crate::shared::types::ApiResponse;

/// Submit a household application for a district
#[utoipa::path(
    post,
    path = "/household-application",
    request_body = HouseholdApplicationDto,
    responses(
        (status = 200, description = "Application registered as pending", body = ApiResponse<HouseholdResponseDto>),
        (status = 404, description = "District not found or no centroid registered")
    ),
    tag = "households"
)]
pub async fn apply_household(
    State(service): State<Arc<HouseholdService>>,
    AppJson(dto): AppJson<HouseholdApplicationDto>,
) -> Result<Json<ApiResponse<HouseholdResponseDto>>> {
    let household = service.apply(dto.district_id).await?;
    Ok(Json(ApiResponse::success(
        Some(household.into()),
        Some("Application received".to_string()),
        None,
    )))
}

/// Create a household directly at explicit coordinates (admin)
#[utoipa::path(
    post,
    path = "/households",
    request_body = CreateHouseholdDto,
    responses(
        (status = 200, description = "Household created as approved", body = ApiResponse<HouseholdResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "District not found")
    ),
    tag = "households"
)]
pub async fn create_household(
    State(service): State<Arc<HouseholdService>>,
    AppJson(dto): AppJson<CreateHouseholdDto>,
) -> Result<Json<ApiResponse<HouseholdResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let household = service.create_direct(dto).await?;
    Ok(Json(ApiResponse::success(Some(household.into()), None, None)))
}

/// Delete a household (admin). Deleting a pending row rejects the application.
#[utoipa::path(
    delete,
    path = "/households/{id}",
    params(
        ("id" = i32, Path, description = "Household id")
    ),
    responses(
        (status = 200, description = "Household deleted"),
        (status = 404, description = "Household not found")
    ),
    tag = "households"
)]
pub async fn delete_household(
    State(service): State<Arc<HouseholdService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Household deleted".to_string()),
        None,
    )))
}

/// List pending household applications
#[utoipa::path(
    get,
    path = "/household-applications/pending",
    responses(
        (status = 200, description = "Pending applications", body = ApiResponse<Vec<PendingHouseholdDto>>)
    ),
    tag = "households"
)]
pub async fn list_pending_households(
    State(service): State<Arc<HouseholdService>>,
) -> Result<Json<ApiResponse<Vec<PendingHouseholdDto>>>> {
    let households = service.list_pending().await?;
    let dtos: Vec<PendingHouseholdDto> = households.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Approve a pending application when a station resolves within the radius
#[utoipa::path(
    post,
    path = "/household-applications/{id}/approve",
    params(
        ("id" = i32, Path, description = "Household id"),
        RadiusQuery
    ),
    responses(
        (status = 200, description = "Household approved", body = ApiResponse<HouseholdResponseDto>),
        (status = 400, description = "No station within radius; household remains pending"),
        (status = 404, description = "Pending household not found")
    ),
    tag = "households"
)]
pub async fn approve_household(
    State(service): State<Arc<HouseholdService>>,
    Path(id): Path<i32>,
    Query(query): Query<RadiusQuery>,
) -> Result<Json<ApiResponse<HouseholdResponseDto>>> {
    let radius = query.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
    let household = service.approve(id, radius).await?;
    Ok(Json(ApiResponse::success(
        Some(household.into()),
        Some("Household approved".to_string()),
        None,
    )))
}

/// List households in a district with their station snapshots
#[utoipa::path(
    get,
    path = "/districts/{id}/households",
    params(
        ("id" = i32, Path, description = "District id")
    ),
    responses(
        (status = 200, description = "Households in the district", body = ApiResponse<Vec<HouseholdWithStationDto>>),
        (status = 404, description = "District not found")
    ),
    tag = "households"
)]
pub async fn list_households_by_district(
    State(service): State<Arc<HouseholdService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<HouseholdWithStationDto>>>> {
    let rows = service.list_by_district(id).await?;
    let dtos: Vec<HouseholdWithStationDto> = rows.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Resolve the nearest station to a household within a radius
#[utoipa::path(
    get,
    path = "/households/{id}/nearest-station",
    params(
        ("id" = i32, Path, description = "Household id"),
        RadiusQuery
    ),
    responses(
        (status = 200, description = "Nearest station with distance", body = ApiResponse<NearestStationDto>),
        (status = 404, description = "Household not found, or no station within radius")
    ),
    tag = "households"
)]
pub async fn nearest_station_for_household(
    State(service): State<Arc<HouseholdService>>,
    Path(id): Path<i32>,
    Query(query): Query<RadiusQuery>,
) -> Result<Json<ApiResponse<NearestStationDto>>> {
    let radius = query.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
    let (station, distance_km) = service.nearest_station(id, radius).await?;
    Ok(Json(ApiResponse::success(
        Some(NearestStationDto {
            station: station.into(),
            distance_km,
        }),
        None,
        None,
    )))
}
