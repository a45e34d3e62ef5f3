use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::analytics::services::StationUsageRow;

/// Per-station usage entry in the summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StationUsageDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub household_count: i64,
}

impl From<StationUsageRow> for StationUsageDto {
    fn from(row: StationUsageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            household_count: row.household_count,
        }
    }
}

/// Response DTO for the deployment summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsSummaryDto {
    pub total_stations: i64,
    pub total_households: i64,
    pub stations: Vec<StationUsageDto>,
}
