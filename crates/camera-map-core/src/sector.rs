//! Field-of-view sectors: a camera's visible area as a closed "pie slice"
//! polygon on the Earth's surface.
//!
//! Everything here is a pure recomputation from the camera record. No input
//! is rejected; out-of-range numbers give degenerate shapes and NaN gives NaN
//! coordinates.

use crate::camera::Camera;
use crate::constants::{SECTOR_RING_LEN, SECTOR_STEPS};
use crate::geodesy::destination;
use crate::geojson::{Feature, FeatureCollection, Geometry, Position, SectorProperties};

/// Closed ring for one camera: center, `SECTOR_STEPS + 1` arc samples from
/// `direction - angle/2` to `direction + angle/2`, then center again.
pub fn sector_ring(camera: &Camera) -> Vec<Position> {
    let center = camera.position();
    let half_angle = camera.angle / 2.0;
    let start_angle = camera.direction - half_angle;
    let end_angle = camera.direction + half_angle;

    let mut ring = Vec::with_capacity(SECTOR_RING_LEN);
    ring.push(center.to_array());
    for i in 0..=SECTOR_STEPS {
        let theta = start_angle + (end_angle - start_angle) * i as f64 / SECTOR_STEPS as f64;
        ring.push(destination(center, camera.range, theta).to_array());
    }
    ring.push(center.to_array());
    ring
}

/// Sector polygon for one camera, tagged with the camera's id.
pub fn build_sector_polygon(camera: &Camera) -> Feature {
    Feature {
        geometry: Geometry::Polygon {
            coordinates: vec![sector_ring(camera)],
        },
        properties: SectorProperties { id: camera.id },
    }
}

/// One sector per camera, in input order.
pub fn build_sector_collection(cameras: &[Camera]) -> FeatureCollection {
    let features = cameras.iter().map(build_sector_polygon).collect::<Vec<_>>();
    log::trace!("built {} sector polygons", features.len());
    FeatureCollection { features }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(direction: f64, angle: f64, range: f64) -> Camera {
        Camera {
            id: 1,
            name: "Test".into(),
            is_active: true,
            latitude: 49.59,
            longitude: 17.2535,
            angle,
            direction,
            range,
        }
    }

    #[test]
    fn ring_has_fixed_length_and_closes_on_center() {
        let ring = sector_ring(&camera(20.0, 40.0, 30.0));
        assert_eq!(ring.len(), SECTOR_STEPS + 3);
        assert_eq!(ring[0], [17.2535, 49.59]);
        assert_eq!(ring[ring.len() - 1], [17.2535, 49.59]);
    }

    #[test]
    fn zero_range_collapses_to_center() {
        let ring = sector_ring(&camera(20.0, 40.0, 0.0));
        for p in &ring[1..ring.len() - 1] {
            assert!((p[0] - 17.2535).abs() < 1e-12 && (p[1] - 49.59).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_angle_repeats_a_single_arc_point() {
        let ring = sector_ring(&camera(90.0, 0.0, 50.0));
        let first = ring[1];
        assert!(ring[1..ring.len() - 1].iter().all(|p| *p == first));
    }

    #[test]
    fn nan_field_poisons_arc_but_not_panics() {
        let ring = sector_ring(&camera(20.0, 40.0, f64::NAN));
        assert_eq!(ring.len(), SECTOR_RING_LEN);
        assert!(ring[1..ring.len() - 1]
            .iter()
            .all(|p| p[0].is_nan() && p[1].is_nan()));
    }

    #[test]
    fn polygon_carries_camera_id() {
        let mut cam = camera(0.0, 90.0, 10.0);
        cam.id = 42;
        let feature = build_sector_polygon(&cam);
        assert_eq!(feature.properties.id, 42);
        assert_eq!(feature.ring().len(), SECTOR_RING_LEN);
    }
}
