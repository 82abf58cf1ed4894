// crates/bizdb-core/src/geo.rs

//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude must lie in [-90, 90], longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Haversine distance between two points, in kilometres.
///
/// Symmetric, non-negative, zero for coincident points (modulo
/// floating-point tolerance).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEGAS: GeoPoint = GeoPoint {
        latitude: 36.1699,
        longitude: -115.1398,
    };

    #[test]
    fn distance_is_zero_for_coincident_points() {
        assert!(haversine_km(VEGAS, VEGAS).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = GeoPoint::new(36.2199, -115.2);
        assert!((haversine_km(VEGAS, p) - haversine_km(p, VEGAS)).abs() < 1e-9);
    }

    #[test]
    fn meridian_distance_matches_arc_length() {
        // Pure north-south movement: haversine reduces to R * dlat.
        let north = GeoPoint::new(VEGAS.latitude + 0.05, VEGAS.longitude);
        let expected = EARTH_RADIUS_KM * 0.05_f64.to_radians();
        assert!((haversine_km(VEGAS, north) - expected).abs() < 1e-6);
    }

    #[test]
    fn equator_degree_of_longitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((haversine_km(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn triangle_inequality_holds() {
        let a = GeoPoint::new(36.0, -115.0);
        let b = GeoPoint::new(36.5, -115.5);
        let c = GeoPoint::new(37.0, -114.5);
        assert!(haversine_km(a, c) <= haversine_km(a, b) + haversine_km(b, c) + 1e-9);
    }

    #[test]
    fn coordinate_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
    }
}
