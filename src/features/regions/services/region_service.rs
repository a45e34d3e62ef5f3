use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, State};

/// Service for reading the seeded state/district hierarchy
pub struct RegionService {
    pool: PgPool,
}

impl RegionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all states
    pub async fn list_states(&self) -> Result<Vec<State>> {
        let states = sqlx::query_as::<_, State>(
            "SELECT id, name, created_at FROM states ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch states: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(states)
    }

    /// Get a state by id
    pub async fn get_state(&self, id: i32) -> Result<State> {
        let state = sqlx::query_as::<_, State>(
            "SELECT id, name, created_at FROM states WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch state {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("State {} not found", id)))?;

        Ok(state)
    }

    /// List all districts in a state
    pub async fn list_districts_by_state(&self, state_id: i32) -> Result<(State, Vec<District>)> {
        // First verify the state exists
        let state = self.get_state(state_id).await?;

        let districts = sqlx::query_as::<_, District>(
            "SELECT id, name, state_id, created_at FROM districts WHERE state_id = $1 ORDER BY id ASC",
        )
        .bind(state.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch districts for state {}: {:?}", state_id, e);
            AppError::Database(e)
        })?;

        Ok((state, districts))
    }
}
