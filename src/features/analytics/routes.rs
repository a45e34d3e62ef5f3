use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::analytics::handlers;
use crate::features::analytics::services::AnalyticsService;

/// Create routes for the analytics feature
pub fn routes(service: Arc<AnalyticsService>) -> Router {
    Router::new()
        .route("/analytics/summary", get(handlers::deployment_summary))
        .with_state(service)
}
