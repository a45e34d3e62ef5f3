use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// District model, belongs to one state
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct District {
    pub id: i32,
    pub name: String,
    pub state_id: i32,
    pub created_at: DateTime<Utc>,
}
