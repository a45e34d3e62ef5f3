use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::State;

/// Response DTO for state data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateResponseDto {
    pub id: i32,
    pub name: String,
}

impl From<State> for StateResponseDto {
    fn from(state: State) -> Self {
        Self {
            id: state.id,
            name: state.name,
        }
    }
}

/// Response DTO for district data with centroid and solar enrichment.
/// All three enrichment fields are null when no centroid is registered for
/// the district, and `solar_flux` alone is null when the external lookup
/// fails.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistrictResponseDto {
    pub id: i32,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub solar_flux: Option<f64>,
}
