use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};

/// Station row with its associated-household count
#[derive(Debug, FromRow)]
pub struct StationUsageRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub household_count: i64,
}

/// Totals and per-station usage for the summary endpoint
#[derive(Debug)]
pub struct DeploymentSummary {
    pub total_stations: i64,
    pub total_households: i64,
    pub stations: Vec<StationUsageRow>,
}

/// Service for deployment-wide analytics
pub struct AnalyticsService {
    pool: PgPool,
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aggregate totals and per-station household counts.
    ///
    /// Counts only live associations: households pointing at a deleted
    /// station do not appear under any station, though they still count
    /// toward the household total.
    pub async fn summary(&self) -> Result<DeploymentSummary> {
        let total_stations = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count stations: {:?}", e);
                AppError::Database(e)
            })?;

        let total_households = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM households")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count households: {:?}", e);
                AppError::Database(e)
            })?;

        let stations = sqlx::query_as::<_, StationUsageRow>(
            "SELECT s.id, s.name, s.latitude, s.longitude, \
                    COUNT(h.id) AS household_count \
             FROM stations s \
             LEFT JOIN households h ON h.associated_station_id = s.id \
             GROUP BY s.id, s.name, s.latitude, s.longitude \
             ORDER BY s.id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate station usage: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(DeploymentSummary {
            total_stations,
            total_households,
            stations,
        })
    }
}
