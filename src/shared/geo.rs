use rand::Rng;

/// Earth's radius in kilometers (for Haversine formula)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude on the same sphere the Haversine
/// formula measures. Also applied to longitude when synthesizing points;
/// east-west offsets shrink by cos(latitude), so a draw never lands farther
/// out than the requested radius.
const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Draw a random point uniformly by area within `radius_km` of the centroid.
pub fn random_point_within(lat: f64, lon: f64, radius_km: f64) -> (f64, f64) {
    let mut rng = rand::thread_rng();
    let r_deg = radius_km / KM_PER_DEGREE;

    let u: f64 = rng.gen();
    let v: f64 = rng.gen();
    // sqrt(u) makes the radial distribution uniform by area, not by radius
    let w = r_deg * u.sqrt();
    let t = 2.0 * std::f64::consts::PI * v;

    (lat + w * t.cos(), lon + w * t.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let distance = haversine_distance_km(8.5241, 76.9366, 8.5241, 76.9366);
        assert!(distance < 0.001);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Trivandrum to Kollam district centroids, roughly 54 km apart
        let distance = haversine_distance_km(8.5241, 76.9366, 8.8932, 76.6141);
        assert!(distance > 48.0 && distance < 60.0, "got {}", distance);
    }

    #[test]
    fn test_haversine_short_distance() {
        // Trivandrum centroid to a station just outside the city center
        let distance = haversine_distance_km(8.5241, 76.9366, 8.53, 76.94);
        assert!(distance < 1.0, "got {}", distance);
    }

    #[test]
    fn test_full_radius_meridional_offset_stays_within_bound() {
        // Worst case: the whole radius spent on the north-south axis, where
        // the degree conversion is exact rather than shrunk by cos(latitude)
        let (lat, lon) = (8.5241, 76.9366);
        let distance = haversine_distance_km(lat, lon, lat + 5.0 / KM_PER_DEGREE, lon);
        assert!(distance <= 5.0 + 1e-9, "got {}", distance);
    }

    #[test]
    fn test_random_point_within_radius() {
        let (lat, lon) = (8.5241, 76.9366);
        for _ in 0..500 {
            let (p_lat, p_lon) = random_point_within(lat, lon, 5.0);
            let distance = haversine_distance_km(lat, lon, p_lat, p_lon);
            assert!(distance <= 5.0 + 1e-6, "point {} km away", distance);
        }
    }

    #[test]
    fn test_random_point_scatters() {
        let (lat, lon) = (8.5241, 76.9366);
        let points: Vec<(f64, f64)> = (0..20).map(|_| random_point_within(lat, lon, 5.0)).collect();
        let all_same = points.windows(2).all(|w| w[0] == w[1]);
        assert!(!all_same);
    }
}
