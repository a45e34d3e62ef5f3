use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Household status enum matching database enum.
///
/// There is no rejected state: rejecting an application deletes the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "household_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HouseholdStatus {
    Pending,
    Approved,
}

impl std::fmt::Display for HouseholdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HouseholdStatus::Pending => write!(f, "pending"),
            HouseholdStatus::Approved => write!(f, "approved"),
        }
    }
}

/// Database model for household.
///
/// `associated_station_id` is set by the approval workflow or the direct
/// admin create; it is not re-evaluated when stations change and may point
/// at a station that no longer exists.
#[derive(Debug, Clone, FromRow)]
pub struct Household {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub district_id: i32,
    pub status: HouseholdStatus,
    pub associated_station_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
