/// Default search radius (km) for radius-bounded nearest-station lookups
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;

/// Radius (km) around a district centroid within which application
/// coordinates are synthesized
pub const APPLICATION_SCATTER_RADIUS_KM: f64 = 5.0;

// =============================================================================
// SEED DATA
// =============================================================================

/// Stations created per district by the bootstrap seeder
pub const STATIONS_PER_SEED_DISTRICT: u32 = 2;

/// Bounding box covering India, used for seeded station coordinates
pub const SEED_LAT_MIN: f64 = 8.0;
pub const SEED_LAT_MAX: f64 = 23.0;
pub const SEED_LON_MIN: f64 = 73.0;
pub const SEED_LON_MAX: f64 = 88.0;
