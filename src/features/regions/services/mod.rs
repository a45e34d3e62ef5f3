mod region_service;
mod solar_service;

pub use region_service::RegionService;
pub use solar_service::SolarFluxService;
