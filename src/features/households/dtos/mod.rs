mod household_dto;

pub use household_dto::{
    CreateHouseholdDto, HouseholdApplicationDto, HouseholdResponseDto, HouseholdWithStationDto,
    PendingHouseholdDto,
};
