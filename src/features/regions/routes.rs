use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers::{self, RegionState};
use crate::features::regions::services::{RegionService, SolarFluxService};

/// Create routes for the regions feature
pub fn routes(regions: Arc<RegionService>, solar: Arc<SolarFluxService>) -> Router {
    let state = RegionState { regions, solar };

    Router::new()
        .route("/states", get(handlers::list_states))
        .route("/states/{id}/districts", get(handlers::list_districts))
        .with_state(state)
}
