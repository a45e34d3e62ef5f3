//! Household application workflow feature.
//!
//! A household either applies through the user-facing path (enters
//! `pending`, location synthesized near the district centroid) or is created
//! directly by an admin (enters `approved` with an immediately resolved
//! station). Approval moves `pending -> approved` exactly once and only when
//! a station resolves within the radius; rejection is deletion.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/household-application` | Apply (pending household) |
//! | POST | `/households` | Direct admin create (approved) |
//! | DELETE | `/households/{id}` | Delete a household |
//! | GET | `/household-applications/pending` | List pending applications |
//! | POST | `/household-applications/{id}/approve` | Approve within radius |
//! | GET | `/districts/{id}/households` | List with station snapshot |
//! | GET | `/households/{id}/nearest-station` | Radius-bounded lookup |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HouseholdService;
