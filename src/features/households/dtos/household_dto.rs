use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::households::models::{Household, HouseholdStatus};
use crate::features::households::services::HouseholdWithStationRow;
use crate::features::stations::dtos::StationResponseDto;

/// Request DTO for a household application. The location is synthesized
/// server-side near the district centroid, so only the district is taken.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HouseholdApplicationDto {
    pub district_id: i32,
}

/// Request DTO for creating a household directly at known coordinates
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHouseholdDto {
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

/// Response DTO for household data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HouseholdResponseDto {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
    pub status: HouseholdStatus,
    pub associated_station_id: Option<i32>,
}

impl From<Household> for HouseholdResponseDto {
    fn from(household: Household) -> Self {
        Self {
            id: household.id,
            latitude: household.latitude,
            longitude: household.longitude,
            district_id: household.district_id,
            status: household.status,
            associated_station_id: household.associated_station_id,
        }
    }
}

/// Compact view of a pending application for the review queue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendingHouseholdDto {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
}

impl From<Household> for PendingHouseholdDto {
    fn from(household: Household) -> Self {
        Self {
            id: household.id,
            latitude: household.latitude,
            longitude: household.longitude,
            district_id: household.district_id,
        }
    }
}

/// Household listing entry with a snapshot of its associated station
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HouseholdWithStationDto {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
    pub status: HouseholdStatus,
    pub associated_station: Option<StationResponseDto>,
}

impl From<HouseholdWithStationRow> for HouseholdWithStationDto {
    fn from(row: HouseholdWithStationRow) -> Self {
        let associated_station = match (
            row.station_id,
            row.station_name,
            row.station_latitude,
            row.station_longitude,
            row.station_district_id,
        ) {
            (Some(id), Some(name), Some(latitude), Some(longitude), Some(district_id)) => {
                Some(StationResponseDto {
                    id,
                    name,
                    latitude,
                    longitude,
                    district_id,
                })
            }
            _ => None,
        };

        Self {
            id: row.id,
            latitude: row.latitude,
            longitude: row.longitude,
            district_id: row.district_id,
            status: row.status,
            associated_station,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(latitude: f64, longitude: f64) -> CreateHouseholdDto {
        CreateHouseholdDto {
            latitude,
            longitude,
            district_id: 1,
        }
    }

    #[test]
    fn test_valid_coordinates_pass() {
        assert!(dto(8.5241, 76.9366).validate().is_ok());
        assert!(dto(90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates_fail() {
        assert!(dto(90.1, 76.9).validate().is_err());
        assert!(dto(8.5, 181.0).validate().is_err());
    }

    #[test]
    fn test_row_without_station_maps_to_none() {
        let row = HouseholdWithStationRow {
            id: 1,
            latitude: 8.52,
            longitude: 76.93,
            district_id: 3,
            status: HouseholdStatus::Pending,
            station_id: None,
            station_name: None,
            station_latitude: None,
            station_longitude: None,
            station_district_id: None,
        };

        let mapped = HouseholdWithStationDto::from(row);
        assert!(mapped.associated_station.is_none());
    }

    #[test]
    fn test_row_with_station_embeds_snapshot() {
        let row = HouseholdWithStationRow {
            id: 2,
            latitude: 8.52,
            longitude: 76.93,
            district_id: 3,
            status: HouseholdStatus::Approved,
            station_id: Some(11),
            station_name: Some("Kazhakkoottam Hub".to_string()),
            station_latitude: Some(8.57),
            station_longitude: Some(76.87),
            station_district_id: Some(3),
        };

        let mapped = HouseholdWithStationDto::from(row);
        let station = mapped.associated_station.unwrap();
        assert_eq!(station.id, 11);
        assert_eq!(station.name, "Kazhakkoottam Hub");
    }
}
