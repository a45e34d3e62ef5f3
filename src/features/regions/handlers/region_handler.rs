use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::centroids;
use crate::features::regions::dtos::{DistrictResponseDto, StateResponseDto};
use crate::features::regions::services::{RegionService, SolarFluxService};
use crate::shared::types::ApiResponse;

/// Shared state for region handlers
#[derive(Clone)]
pub struct RegionState {
    pub regions: Arc<RegionService>,
    pub solar: Arc<SolarFluxService>,
}

/// List all states
#[utoipa::path(
    get,
    path = "/states",
    responses(
        (status = 200, description = "List of states", body = ApiResponse<Vec<StateResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_states(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<Vec<StateResponseDto>>>> {
    let states = state.regions.list_states().await?;
    let dtos: Vec<StateResponseDto> = states.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List districts in a state, with centroid and solar-flux enrichment
#[utoipa::path(
    get,
    path = "/states/{id}/districts",
    params(
        ("id" = i32, Path, description = "State id")
    ),
    responses(
        (status = 200, description = "Districts with centroid and solar flux", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 404, description = "State not found")
    ),
    tag = "regions"
)]
pub async fn list_districts(
    State(state): State<RegionState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let (parent_state, districts) = state.regions.list_districts_by_state(id).await?;

    let mut dtos = Vec::with_capacity(districts.len());
    for district in districts {
        let centroid = centroids::district_centroid(&parent_state.name, &district.name);

        let solar_flux = match centroid {
            Some((lat, lon)) => match state.solar.annual_mean_irradiance(lat, lon).await {
                Ok(value) => Some(value),
                Err(e) => {
                    // Best-effort collaborator: degrade to null, never fail the request
                    tracing::warn!(
                        "Solar flux unavailable for district {} ({}): {}",
                        district.id,
                        district.name,
                        e
                    );
                    None
                }
            },
            None => None,
        };

        dtos.push(DistrictResponseDto {
            id: district.id,
            name: district.name,
            latitude: centroid.map(|(lat, _)| lat),
            longitude: centroid.map(|(_, lon)| lon),
            solar_flux,
        });
    }

    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
