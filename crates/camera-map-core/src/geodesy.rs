//! Great-circle helpers on a spherical Earth.
//!
//! Positions are `DVec2(longitude, latitude)` in degrees. Bearings are degrees
//! clockwise from north and are never normalized: -10 means 10 degrees
//! counter-clockwise of north, 370 is the same heading as 10.

use glam::DVec2;

use crate::constants::EARTH_RADIUS_M;

/// Point reached by travelling `distance_m` meters from `origin` along the
/// initial bearing `bearing_deg`. The returned longitude is not wrapped into
/// [-180, 180].
pub fn destination(origin: DVec2, distance_m: f64, bearing_deg: f64) -> DVec2 {
    let lon1 = origin.x.to_radians();
    let lat1 = origin.y.to_radians();
    let bearing = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M; // angular distance

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    DVec2::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Haversine distance in meters.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial great-circle bearing from `a` to `b`, degrees in (-180, 180].
pub fn initial_bearing(a: DVec2, b: DVec2) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLOMOUC: DVec2 = DVec2::new(17.2535, 49.59);

    #[test]
    fn zero_distance_stays_put() {
        let p = destination(OLOMOUC, 0.0, 123.0);
        assert!((p - OLOMOUC).length() < 1e-12);
    }

    #[test]
    fn due_north_only_changes_latitude() {
        let p = destination(OLOMOUC, 1000.0, 0.0);
        assert!((p.x - OLOMOUC.x).abs() < 1e-12);
        // one degree of latitude is ~111.2 km on this sphere
        let expected = 1000.0 / (EARTH_RADIUS_M * std::f64::consts::PI / 180.0);
        assert!((p.y - OLOMOUC.y - expected).abs() < 1e-9);
    }

    #[test]
    fn destination_round_trips_through_distance_and_bearing() {
        for bearing in [-170.0, -90.0, -10.0, 0.0, 45.0, 135.0, 179.0] {
            let p = destination(OLOMOUC, 250.0, bearing);
            assert!((distance(OLOMOUC, p) - 250.0).abs() < 1e-6, "bearing {bearing}");
            assert!((initial_bearing(OLOMOUC, p) - bearing).abs() < 1e-6, "bearing {bearing}");
        }
    }

    #[test]
    fn negative_bearing_matches_its_positive_equivalent() {
        let a = destination(OLOMOUC, 30.0, -10.0);
        let b = destination(OLOMOUC, 30.0, 350.0);
        assert!((a - b).length() < 1e-12);
    }

    #[test]
    fn longitude_is_not_wrapped_across_antimeridian() {
        let p = destination(DVec2::new(179.9999, 0.0), 1000.0, 90.0);
        assert!(p.x > 180.0);
    }
}
