use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Charging station model, belongs to one district
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
    pub created_at: DateTime<Utc>,
}
