use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::analytics::dtos::{AnalyticsSummaryDto, StationUsageDto};
use crate::features::analytics::services::AnalyticsService;
use crate::shared::types::ApiResponse;

/// Deployment summary: totals plus per-station household counts
#[utoipa::path(
    get,
    path = "/analytics/summary",
    responses(
        (status = 200, description = "Deployment summary", body = ApiResponse<AnalyticsSummaryDto>)
    ),
    tag = "analytics"
)]
pub async fn deployment_summary(
    State(service): State<Arc<AnalyticsService>>,
) -> Result<Json<ApiResponse<AnalyticsSummaryDto>>> {
    let summary = service.summary().await?;
    let dto = AnalyticsSummaryDto {
        total_stations: summary.total_stations,
        total_households: summary.total_households,
        stations: summary.stations.into_iter().map(StationUsageDto::from).collect(),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
