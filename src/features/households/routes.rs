use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::households::handlers;
use crate::features::households::services::HouseholdService;

/// Create routes for the households feature
pub fn routes(service: Arc<HouseholdService>) -> Router {
    Router::new()
        .route(
            "/household-application",
            post(handlers::apply_household),
        )
        .route(
            "/households",
            post(handlers::create_household),
        )
        .route(
            "/households/{id}",
            delete(handlers::delete_household),
        )
        .route(
            "/household-applications/pending",
            get(handlers::list_pending_households),
        )
        .route(
            "/household-applications/{id}/approve",
            post(handlers::approve_household),
        )
        .route(
            "/districts/{id}/households",
            get(handlers::list_households_by_district),
        )
        .route(
            "/households/{id}/nearest-station",
            get(handlers::nearest_station_for_household),
        )
        .with_state(service)
}
