use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Static (state name, district name) -> (latitude, longitude) centroid
    /// table. Demo subset; most real districts are absent, and a miss is a
    /// normal handled case for every consumer.
    static ref DISTRICT_CENTROIDS: HashMap<(&'static str, &'static str), (f64, f64)> = {
        let mut m = HashMap::new();
        // Kerala
        m.insert(("Kerala", "Trivandrum"), (8.5241, 76.9366));
        m.insert(("Kerala", "Thiruvananthapuram"), (8.5241, 76.9366)); // alias for Trivandrum
        m.insert(("Kerala", "Kollam"), (8.8932, 76.6141));
        m.insert(("Kerala", "Kozhikode"), (11.2588, 75.7804));
        m.insert(("Kerala", "Alappuzha"), (9.4981, 76.3388));
        m.insert(("Kerala", "Ernakulam"), (10.0850, 76.5843));
        m.insert(("Kerala", "Idukki"), (9.8490, 77.0995));
        m.insert(("Kerala", "Kannur"), (11.8745, 75.3704));
        m.insert(("Kerala", "Kasaragod"), (12.4996, 75.0260));
        m.insert(("Kerala", "Kottayam"), (9.5916, 76.5222));
        m.insert(("Kerala", "Malappuram"), (11.0736, 76.0711));
        m.insert(("Kerala", "Palakkad"), (10.7867, 76.6548));
        m.insert(("Kerala", "Pathanamthitta"), (9.2646, 76.7870));
        m.insert(("Kerala", "Thrissur"), (10.5276, 76.2144));
        m.insert(("Kerala", "Wayanad"), (11.6854, 76.1310));
        // Karnataka
        m.insert(("Karnataka", "Bangalore"), (12.9716, 77.5946));
        m.insert(("Karnataka", "Mysore"), (12.2958, 76.6394));
        m.insert(("Karnataka", "Mangalore"), (12.9141, 74.8560));
        // Maharashtra
        m.insert(("Maharashtra", "Mumbai"), (19.0760, 72.8777));
        m.insert(("Maharashtra", "Pune"), (18.5204, 73.8567));
        m.insert(("Maharashtra", "Nagpur"), (21.1458, 79.0882));
        m
    };
}

/// Look up the registered centroid for a (state, district) pair.
pub fn district_centroid(state_name: &str, district_name: &str) -> Option<(f64, f64)> {
    DISTRICT_CENTROIDS.get(&(state_name, district_name)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_centroid_found() {
        let centroid = district_centroid("Kerala", "Trivandrum");
        assert_eq!(centroid, Some((8.5241, 76.9366)));
    }

    #[test]
    fn test_alias_matches_primary_name() {
        assert_eq!(
            district_centroid("Kerala", "Thiruvananthapuram"),
            district_centroid("Kerala", "Trivandrum")
        );
    }

    #[test]
    fn test_unregistered_pair_is_none() {
        assert_eq!(district_centroid("Kerala", "Bangalore"), None);
        assert_eq!(district_centroid("Goa", "Panaji"), None);
    }
}
