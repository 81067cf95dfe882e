pub use crate::index::constants::EARTH_RADIUS_METERS;

use std::f64::consts::PI;

const DR: f64 = PI / 180.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DR
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad / DR
}

/// Great-circle distance in meters between two lon/lat points (haversine).
///
/// # Example
/// ```
/// use geohash_rs::distance_meters;
///
/// let d = distance_meters(13.816, 23.357, 13.826, 23.367);
/// assert!(d > 1000.0 && d < 2000.0);
/// ```
pub fn distance_meters(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let lat1r = deg_to_rad(lat1);
    let lng1r = deg_to_rad(lng1);
    let lat2r = deg_to_rad(lat2);
    let lng2r = deg_to_rad(lng2);
    let u = ((lat2r - lat1r) / 2.0).sin();
    let v = ((lng2r - lng1r) / 2.0).sin();

    // clamp guards asin against rounding just above 1 for antipodal points
    let h = (u * u + lat1r.cos() * lat2r.cos() * v * v).min(1.0);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_identity() {
        assert_eq!(distance_meters(13.816, 23.357, 13.816, 23.357), 0.0);
        assert_eq!(distance_meters(-180.0, -85.0, -180.0, -85.0), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let (lng1, lat1) = (rng.gen_range(-180.0..180.0), rng.gen_range(-85.0..85.0));
            let (lng2, lat2) = (rng.gen_range(-180.0..180.0), rng.gen_range(-85.0..85.0));
            let ab = distance_meters(lng1, lat1, lng2, lat2);
            let ba = distance_meters(lng2, lat2, lng1, lat1);
            assert!((ab - ba).abs() < 1e-6, "{} vs {}", ab, ba);
            assert!(ab >= 0.0);
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // one degree along a meridian is R * pi / 180
        let d = distance_meters(0.0, 0.0, 0.0, 1.0);
        let expected = EARTH_RADIUS_METERS * PI / 180.0;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_known_pair() {
        // the two sample points used in the search tests are ~1.5km apart
        let d = distance_meters(
            13.81600230932235718,
            23.35700050086033031,
            13.82600158452987671,
            23.36699997583392729,
        );
        assert!((d - 1510.0).abs() < 10.0, "distance {}", d);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = distance_meters(0.0, 0.0, 180.0, 0.0);
        assert!((d - PI * EARTH_RADIUS_METERS).abs() < 1e-3);
    }

    #[test]
    fn test_degree_conversions() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-12);
    }
}
