//! Deployment analytics feature.
//!
//! Read-only summary of the deployment: total station and household counts
//! plus a per-station breakdown of how many approved households are
//! associated with each station.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AnalyticsService;
