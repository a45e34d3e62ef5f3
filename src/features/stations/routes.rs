use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::stations::handlers;
use crate::features::stations::services::StationService;

/// Create routes for the stations feature
pub fn routes(service: Arc<StationService>) -> Router {
    Router::new()
        .route(
            "/stations",
            post(handlers::create_station),
        )
        .route(
            "/stations/{id}",
            axum::routing::delete(handlers::delete_station),
        )
        .route(
            "/districts/{id}/stations",
            get(handlers::list_stations_by_district),
        )
        .with_state(service)
}
