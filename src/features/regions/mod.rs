//! Indian administrative regions feature.
//!
//! States and districts are created once by the startup seeder and are
//! otherwise immutable. District listings are enriched with the registered
//! centroid (when one exists) and a best-effort solar-flux reading.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/states` | List all states |
//! | GET | `/states/{id}/districts` | List districts with centroid and solar flux |

pub mod centroids;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{RegionService, SolarFluxService};
