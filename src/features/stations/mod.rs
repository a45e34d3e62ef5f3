//! Charging stations feature.
//!
//! Stations are created and deleted by direct administrative calls, and the
//! nearest-station resolver here backs the household approval workflow.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/stations` | Create a station |
//! | DELETE | `/stations/{id}` | Delete a station |
//! | GET | `/districts/{id}/stations` | List stations in a district |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::StationService;
