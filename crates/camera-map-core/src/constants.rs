use glam::DVec2;

// Shared geometry and editor tuning constants used by both web and native frontends.

// Sector sampling
pub const SECTOR_STEPS: usize = 32; // arc segments; the arc itself has SECTOR_STEPS + 1 samples
pub const SECTOR_RING_LEN: usize = SECTOR_STEPS + 3; // center + arc samples + closing center

// Mean Earth radius in meters, as used by common GeoJSON tooling
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

// Map view defaults (a spot in Olomouc)
pub const DEFAULT_CENTER_LNG: f64 = 17.2535;
pub const DEFAULT_CENTER_LAT: f64 = 49.5900;
pub const DEFAULT_ZOOM: f64 = 12.0;
pub const FOCUS_ZOOM: f64 = 15.0; // zoom used when flying to a selected camera

// Template for a freshly placed camera
pub const NEW_CAMERA_NAME: &str = "New camera";
pub const NEW_CAMERA_ANGLE: f64 = 40.0;
pub const NEW_CAMERA_RANGE: f64 = 30.0;
pub const NEW_CAMERA_DIRECTION: f64 = 20.0;

// Editor slider bounds (inclusive)
pub const DIRECTION_BOUNDS: (f64, f64) = (0.0, 360.0);
pub const RANGE_BOUNDS: (f64, f64) = (10.0, 400.0);
pub const ANGLE_BOUNDS: (f64, f64) = (10.0, 360.0);

// Highlight filter id that matches no sector
pub const NO_SELECTION_ID: i64 = -1;

#[inline]
pub fn default_center() -> DVec2 {
    DVec2::new(DEFAULT_CENTER_LNG, DEFAULT_CENTER_LAT)
}
