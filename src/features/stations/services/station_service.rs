use std::collections::HashSet;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::stations::dtos::CreateStationDto;
use crate::features::stations::models::Station;
use crate::shared::geo;

const STATION_COLUMNS: &str = "id, name, latitude, longitude, district_id, created_at";

/// Service for station CRUD and the nearest-station resolver
pub struct StationService {
    pool: PgPool,
}

impl StationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a station in a district
    pub async fn create(&self, dto: CreateStationDto) -> Result<Station> {
        self.ensure_district_exists(dto.district_id).await?;

        let station = sqlx::query_as::<_, Station>(&format!(
            "INSERT INTO stations (name, latitude, longitude, district_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            STATION_COLUMNS
        ))
        .bind(&dto.name)
        .bind(dto.latitude)
        .bind(dto.longitude)
        .bind(dto.district_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create station: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Station created: id={}, name={}, district={}",
            station.id,
            station.name,
            station.district_id
        );

        Ok(station)
    }

    /// Delete a station. Households keep any stale association; there is no
    /// re-evaluation of previously approved rows.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete station {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Station {} not found", id)));
        }

        tracing::info!("Station deleted: id={}", id);
        Ok(())
    }

    /// List stations in a district
    pub async fn list_by_district(&self, district_id: i32) -> Result<Vec<Station>> {
        self.ensure_district_exists(district_id).await?;

        let stations = sqlx::query_as::<_, Station>(&format!(
            "SELECT {} FROM stations WHERE district_id = $1 ORDER BY id ASC",
            STATION_COLUMNS
        ))
        .bind(district_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch stations for district {}: {:?}", district_id, e);
            AppError::Database(e)
        })?;

        Ok(stations)
    }

    /// Resolve the nearest station to a point.
    ///
    /// Candidates are the stations in the given district plus every station
    /// in that district's state, deduplicated by id with district-local rows
    /// first. With `radius_km` set, only candidates within the radius are
    /// eligible; `None` means unbounded. Returns the station and its
    /// distance, or `Ok(None)` when nothing qualifies.
    pub async fn find_nearest(
        &self,
        latitude: f64,
        longitude: f64,
        district_id: i32,
        radius_km: Option<f64>,
    ) -> Result<Option<(Station, f64)>> {
        let mut candidates = sqlx::query_as::<_, Station>(&format!(
            "SELECT {} FROM stations WHERE district_id = $1 ORDER BY id ASC",
            STATION_COLUMNS
        ))
        .bind(district_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch district candidates: {:?}", e);
            AppError::Database(e)
        })?;

        let state_wide = sqlx::query_as::<_, Station>(
            "SELECT s.id, s.name, s.latitude, s.longitude, s.district_id, s.created_at \
             FROM stations s \
             JOIN districts d ON d.id = s.district_id \
             WHERE d.state_id = (SELECT state_id FROM districts WHERE id = $1) \
             ORDER BY s.id ASC",
        )
        .bind(district_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch state-wide candidates: {:?}", e);
            AppError::Database(e)
        })?;

        let mut seen: HashSet<i32> = candidates.iter().map(|s| s.id).collect();
        for station in state_wide {
            if seen.insert(station.id) {
                candidates.push(station);
            }
        }

        Ok(Self::nearest_within(latitude, longitude, &candidates, radius_km))
    }

    /// Scan candidates for the minimum haversine distance from the reference
    /// point. Ties keep the first candidate in scan order, which after the
    /// id-ordered queries above means the lowest station id.
    pub fn nearest_within(
        latitude: f64,
        longitude: f64,
        candidates: &[Station],
        radius_km: Option<f64>,
    ) -> Option<(Station, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (idx, station) in candidates.iter().enumerate() {
            let distance =
                geo::haversine_distance_km(latitude, longitude, station.latitude, station.longitude);

            if let Some(radius) = radius_km {
                if distance > radius {
                    continue;
                }
            }

            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((idx, distance)),
            }
        }

        best.map(|(idx, distance)| (candidates[idx].clone(), distance))
    }

    async fn ensure_district_exists(&self, district_id: i32) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM districts WHERE id = $1)",
        )
        .bind(district_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check district {}: {:?}", district_id, e);
            AppError::Database(e)
        })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "District {} not found",
                district_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn station(id: i32, latitude: f64, longitude: f64) -> Station {
        Station {
            id,
            name: format!("Station {}", id),
            latitude,
            longitude,
            district_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_nearest_empty_candidates() {
        assert!(StationService::nearest_within(8.52, 76.93, &[], None).is_none());
        assert!(StationService::nearest_within(8.52, 76.93, &[], Some(10.0)).is_none());
    }

    #[test]
    fn test_nearest_unbounded_picks_global_minimum() {
        // Reference near Trivandrum; second station is hundreds of km away
        let candidates = vec![
            station(1, 12.9716, 77.5946),
            station(2, 8.53, 76.94),
            station(3, 19.0760, 72.8777),
        ];

        let (nearest, distance) =
            StationService::nearest_within(8.5241, 76.9366, &candidates, None).unwrap();
        assert_eq!(nearest.id, 2);
        assert!(distance < 1.0);
    }

    #[test]
    fn test_nearest_unbounded_returns_even_distant_station() {
        // No radius bound: a far-away station still wins when it is all there is
        let candidates = vec![station(7, 19.0760, 72.8777)];

        let (nearest, distance) =
            StationService::nearest_within(8.5241, 76.9366, &candidates, None).unwrap();
        assert_eq!(nearest.id, 7);
        assert!(distance > 1000.0);
    }

    #[test]
    fn test_nearest_radius_excludes_distant_station() {
        // Kollam is ~54 km from the Trivandrum centroid
        let candidates = vec![station(1, 8.8932, 76.6141)];

        assert!(
            StationService::nearest_within(8.5241, 76.9366, &candidates, Some(1.0)).is_none()
        );
        let within = StationService::nearest_within(8.5241, 76.9366, &candidates, Some(60.0));
        assert!(within.is_some());
    }

    #[test]
    fn test_nearest_radius_result_never_exceeds_radius() {
        let candidates = vec![
            station(1, 8.53, 76.94),
            station(2, 8.8932, 76.6141),
            station(3, 11.2588, 75.7804),
        ];

        let (_, distance) =
            StationService::nearest_within(8.5241, 76.9366, &candidates, Some(10.0)).unwrap();
        assert!(distance <= 10.0);
    }

    #[test]
    fn test_nearest_tie_breaks_to_first_in_scan_order() {
        // Two stations at the same point; lowest id comes first in id order
        let candidates = vec![station(4, 8.53, 76.94), station(9, 8.53, 76.94)];

        let (nearest, _) =
            StationService::nearest_within(8.5241, 76.9366, &candidates, Some(10.0)).unwrap();
        assert_eq!(nearest.id, 4);
    }
}
