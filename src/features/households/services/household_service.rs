use std::sync::Arc;

use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::households::dtos::CreateHouseholdDto;
use crate::features::households::models::{Household, HouseholdStatus};
use crate::features::regions::centroids;
use crate::features::stations::models::Station;
use crate::features::stations::services::StationService;
use crate::shared::geo;

const HOUSEHOLD_COLUMNS: &str =
    "id, latitude, longitude, district_id, status, associated_station_id, created_at";

/// District row joined with its state name, used to resolve centroids
#[derive(Debug, FromRow)]
struct DistrictWithState {
    id: i32,
    name: String,
    state_name: String,
}

/// Household row joined with its associated station, if any
#[derive(Debug, FromRow)]
pub struct HouseholdWithStationRow {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
    pub status: HouseholdStatus,
    pub station_id: Option<i32>,
    pub station_name: Option<String>,
    pub station_latitude: Option<f64>,
    pub station_longitude: Option<f64>,
    pub station_district_id: Option<i32>,
}

/// Service for the household application and approval workflow
pub struct HouseholdService {
    pool: PgPool,
    stations: Arc<StationService>,
}

impl HouseholdService {
    pub fn new(pool: PgPool, stations: Arc<StationService>) -> Self {
        Self { pool, stations }
    }

    /// Register a household application for a district.
    ///
    /// The caller supplies only the district; the location is synthesized
    /// uniformly within 5 km of the district centroid. The row enters the
    /// workflow as `pending` with no station association.
    pub async fn apply(&self, district_id: i32) -> Result<Household> {
        let district = self.fetch_district(district_id).await?;

        let (centroid_lat, centroid_lon) =
            centroids::district_centroid(&district.state_name, &district.name).ok_or_else(
                || {
                    AppError::NotFound(format!(
                        "No centroid registered for district '{}' in state '{}'",
                        district.name, district.state_name
                    ))
                },
            )?;

        let (latitude, longitude) = geo::random_point_within(
            centroid_lat,
            centroid_lon,
            crate::shared::constants::APPLICATION_SCATTER_RADIUS_KM,
        );

        let household = sqlx::query_as::<_, Household>(&format!(
            "INSERT INTO households (latitude, longitude, district_id, status) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            HOUSEHOLD_COLUMNS
        ))
        .bind(latitude)
        .bind(longitude)
        .bind(district.id)
        .bind(HouseholdStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create household application: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Household application received: id={}, district={}",
            household.id,
            household.district_id
        );

        Ok(household)
    }

    /// Create a household directly at explicit coordinates (admin).
    ///
    /// Skips the pending state entirely: the row is created `approved`, with
    /// the nearest station resolved without a radius bound. When the state
    /// has no stations at all the household is still created, just without an
    /// association.
    pub async fn create_direct(&self, dto: CreateHouseholdDto) -> Result<Household> {
        self.fetch_district(dto.district_id).await?;

        let nearest = self
            .stations
            .find_nearest(dto.latitude, dto.longitude, dto.district_id, None)
            .await?;

        let station_id = match &nearest {
            Some((station, distance)) => {
                tracing::info!(
                    "Resolved station {} at {:.2} km for direct household create",
                    station.id,
                    distance
                );
                Some(station.id)
            }
            None => {
                tracing::warn!(
                    "No station available in district {} or its state; household created without association",
                    dto.district_id
                );
                None
            }
        };

        let household = sqlx::query_as::<_, Household>(&format!(
            "INSERT INTO households (latitude, longitude, district_id, status, associated_station_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            HOUSEHOLD_COLUMNS
        ))
        .bind(dto.latitude)
        .bind(dto.longitude)
        .bind(dto.district_id)
        .bind(HouseholdStatus::Approved)
        .bind(station_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create household: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Household created: id={}, district={}, station={:?}",
            household.id,
            household.district_id,
            household.associated_station_id
        );

        Ok(household)
    }

    /// Approve a pending application.
    ///
    /// Resolves the nearest station within `radius_km` of the household's
    /// stored location. A miss rejects the approval and leaves the row
    /// pending. Concurrent approvals of the same row are last-writer-wins on
    /// the association; the status transition is idempotent.
    pub async fn approve(&self, id: i32, radius_km: f64) -> Result<Household> {
        let pending = sqlx::query_as::<_, Household>(&format!(
            "SELECT {} FROM households WHERE id = $1 AND status = $2",
            HOUSEHOLD_COLUMNS
        ))
        .bind(id)
        .bind(HouseholdStatus::Pending)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch pending household {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Pending household {} not found", id)))?;

        let (station, distance) = self
            .stations
            .find_nearest(
                pending.latitude,
                pending.longitude,
                pending.district_id,
                Some(radius_km),
            )
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "No station within {} km; household {} remains pending",
                    radius_km, id
                ))
            })?;

        let household = sqlx::query_as::<_, Household>(&format!(
            "UPDATE households SET status = $1, associated_station_id = $2 \
             WHERE id = $3 RETURNING {}",
            HOUSEHOLD_COLUMNS
        ))
        .bind(HouseholdStatus::Approved)
        .bind(station.id)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to approve household {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Household approved: id={}, station={}, distance={:.2}km",
            household.id,
            station.id,
            distance
        );

        Ok(household)
    }

    /// Delete a household in any status. Deleting a pending row is how an
    /// application is rejected.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM households WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete household {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Household {} not found", id)));
        }

        tracing::info!("Household deleted: id={}", id);
        Ok(())
    }

    /// List all pending applications across every district
    pub async fn list_pending(&self) -> Result<Vec<Household>> {
        let households = sqlx::query_as::<_, Household>(&format!(
            "SELECT {} FROM households WHERE status = $1 ORDER BY id ASC",
            HOUSEHOLD_COLUMNS
        ))
        .bind(HouseholdStatus::Pending)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch pending households: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(households)
    }

    /// List households in a district with a snapshot of the associated
    /// station. Associations pointing at deleted stations come back with no
    /// station fields, same as rows that never had one.
    pub async fn list_by_district(
        &self,
        district_id: i32,
    ) -> Result<Vec<HouseholdWithStationRow>> {
        self.fetch_district(district_id).await?;

        let rows = sqlx::query_as::<_, HouseholdWithStationRow>(
            "SELECT h.id, h.latitude, h.longitude, h.district_id, h.status, \
                    s.id AS station_id, s.name AS station_name, \
                    s.latitude AS station_latitude, s.longitude AS station_longitude, \
                    s.district_id AS station_district_id \
             FROM households h \
             LEFT JOIN stations s ON s.id = h.associated_station_id \
             WHERE h.district_id = $1 \
             ORDER BY h.id ASC",
        )
        .bind(district_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch households for district {}: {:?}",
                district_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Resolve the nearest station to a household's stored location within a
    /// radius. Unlike approval this is a read-only lookup and does not touch
    /// the stored association.
    pub async fn nearest_station(&self, id: i32, radius_km: f64) -> Result<(Station, f64)> {
        let household = sqlx::query_as::<_, Household>(&format!(
            "SELECT {} FROM households WHERE id = $1",
            HOUSEHOLD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch household {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Household {} not found", id)))?;

        self.stations
            .find_nearest(
                household.latitude,
                household.longitude,
                household.district_id,
                Some(radius_km),
            )
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No station found within {} km of household {}",
                    radius_km, id
                ))
            })
    }

    async fn fetch_district(&self, district_id: i32) -> Result<DistrictWithState> {
        sqlx::query_as::<_, DistrictWithState>(
            "SELECT d.id, d.name, s.name AS state_name \
             FROM districts d \
             JOIN states s ON s.id = d.state_id \
             WHERE d.id = $1",
        )
        .bind(district_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch district {}: {:?}", district_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("District {} not found", district_id)))
    }
}
