use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// State model, top of the region hierarchy
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct State {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
