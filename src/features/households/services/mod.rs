mod household_service;

pub use household_service::{HouseholdService, HouseholdWithStationRow};
