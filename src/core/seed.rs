use std::collections::BTreeMap;

use anyhow::Context;
use rand::Rng;
use sqlx::PgPool;

use crate::shared::constants::{
    SEED_LAT_MAX, SEED_LAT_MIN, SEED_LON_MAX, SEED_LON_MIN, STATIONS_PER_SEED_DISTRICT,
};

/// Seed reference file shape: state name -> ordered district names.
///
/// States insert in name order, not file order, so state ids come out
/// alphabetical; nothing keys off state ids. District order within a state
/// follows the file.
pub type SeedFile = BTreeMap<String, Vec<String>>;

/// One-time bootstrap of states, districts and demo stations.
///
/// Idempotent: a single existing State row means a previous run already
/// seeded, and the whole step is skipped. A missing or malformed seed file
/// propagates and fails process start.
pub async fn seed_if_empty(pool: &PgPool, seed_path: &str) -> anyhow::Result<()> {
    let already_seeded = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM states)")
        .fetch_one(pool)
        .await
        .context("failed to check for existing seed data")?;

    if already_seeded {
        tracing::info!("Seed data already present, skipping bootstrap");
        return Ok(());
    }

    let raw = tokio::fs::read_to_string(seed_path)
        .await
        .with_context(|| format!("failed to read seed file {}", seed_path))?;
    let data: SeedFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", seed_path))?;

    let mut tx = pool.begin().await?;
    let mut station_count = 0u32;

    for (state_name, districts) in &data {
        let state_id =
            sqlx::query_scalar::<_, i32>("INSERT INTO states (name) VALUES ($1) RETURNING id")
                .bind(state_name)
                .fetch_one(&mut *tx)
                .await?;

        for district_name in districts {
            let district_id = sqlx::query_scalar::<_, i32>(
                "INSERT INTO districts (name, state_id) VALUES ($1, $2) RETURNING id",
            )
            .bind(district_name)
            .bind(state_id)
            .fetch_one(&mut *tx)
            .await?;

            // Demo stations get random coordinates anywhere in the country
            // bounding box, not near the district centroid. Known seed-data
            // limitation carried over from the reference data set.
            for i in 1..=STATIONS_PER_SEED_DISTRICT {
                let (latitude, longitude) = {
                    let mut rng = rand::thread_rng();
                    (
                        rng.gen_range(SEED_LAT_MIN..SEED_LAT_MAX),
                        rng.gen_range(SEED_LON_MIN..SEED_LON_MAX),
                    )
                };

                sqlx::query(
                    "INSERT INTO stations (name, latitude, longitude, district_id) VALUES ($1, $2, $3, $4)",
                )
                .bind(format!("{} Station {}", district_name, i))
                .bind(latitude)
                .bind(longitude)
                .bind(district_id)
                .execute(&mut *tx)
                .await?;
                station_count += 1;
            }
        }
    }

    tx.commit().await?;

    tracing::info!(
        "Seeded {} states, {} districts, {} stations",
        data.len(),
        data.values().map(|d| d.len()).sum::<usize>(),
        station_count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_file_parses() {
        let raw = std::fs::read_to_string("seed/districts_india.json").unwrap();
        let data: SeedFile = serde_json::from_str(&raw).unwrap();

        assert!(data.contains_key("Kerala"));
        let kerala = &data["Kerala"];
        assert_eq!(kerala.first().map(String::as_str), Some("Trivandrum"));
        assert!(data.values().all(|districts| !districts.is_empty()));
    }

    #[test]
    fn test_states_iterate_in_name_order_not_file_order() {
        let raw = r#"{"Kerala": ["Trivandrum"], "Karnataka": ["Bangalore"]}"#;
        let data: SeedFile = serde_json::from_str(raw).unwrap();
        assert_eq!(data.keys().next().map(String::as_str), Some("Karnataka"));
    }

    #[test]
    fn test_seed_file_rejects_wrong_shape() {
        let raw = r#"{"Kerala": {"Trivandrum": [8.5, 76.9]}}"#;
        assert!(serde_json::from_str::<SeedFile>(raw).is_err());
    }
}
