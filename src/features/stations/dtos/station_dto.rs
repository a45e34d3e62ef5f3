use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::stations::models::Station;

/// Request DTO for creating a station
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStationDto {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    pub district_id: i32,
}

/// Response DTO for station data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StationResponseDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
}

impl From<Station> for StationResponseDto {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
            latitude: station.latitude,
            longitude: station.longitude,
            district_id: station.district_id,
        }
    }
}

/// Resolved nearest station with its haversine distance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NearestStationDto {
    pub station: StationResponseDto,
    pub distance_km: f64,
}

/// Query parameter for radius-bounded nearest-station lookups
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RadiusQuery {
    /// Search radius in kilometers (default: 10)
    #[param(example = 10.0)]
    pub radius: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(latitude: f64, longitude: f64) -> CreateStationDto {
        CreateStationDto {
            name: "Test Station".to_string(),
            latitude,
            longitude,
            district_id: 1,
        }
    }

    #[test]
    fn test_valid_coordinates_pass() {
        assert!(dto(8.5241, 76.9366).validate().is_ok());
        assert!(dto(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates_fail() {
        assert!(dto(91.0, 76.9).validate().is_err());
        assert!(dto(-90.5, 76.9).validate().is_err());
        assert!(dto(8.5, 180.5).validate().is_err());
        assert!(dto(8.5, -181.0).validate().is_err());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut invalid = dto(8.5, 76.9);
        invalid.name = String::new();
        assert!(invalid.validate().is_err());
    }
}
