mod station_dto;

pub use station_dto::{CreateStationDto, NearestStationDto, RadiusQuery, StationResponseDto};
