//! Camera records as delivered by the cameras API and edited in the UI.
//!
//! The geometric fields decode leniently: a record missing any of them still
//! decodes, with NaN in the gap, so the generated sector is visibly poisoned
//! instead of plausibly wrong. Callers that want to reject such records use
//! [`Camera::validate`] or [`decode_valid_cameras`].

use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    ANGLE_BOUNDS, DIRECTION_BOUNDS, NEW_CAMERA_ANGLE, NEW_CAMERA_DIRECTION, NEW_CAMERA_NAME,
    NEW_CAMERA_RANGE, RANGE_BOUNDS,
};
use crate::error::CameraError;

fn nan() -> f64 {
    f64::NAN
}

// JSON has no NaN; encoders write it as `null`, so read `null` back as NaN.
fn nan_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// One physical camera and its configured field of view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    /// Degrees, WGS84.
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub latitude: f64,
    /// Degrees, WGS84.
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub longitude: f64,
    /// Aperture of the view in degrees, expected in (0, 360].
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub angle: f64,
    /// Heading of the view's center line, degrees clockwise from north.
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub direction: f64,
    /// View distance in meters.
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub range: f64,
}

/// A single field change coming from the camera editor form.
#[derive(Clone, Debug, PartialEq)]
pub enum CameraEdit {
    Name(String),
    Active(bool),
    Direction(f64),
    Range(f64),
    Angle(f64),
}

impl Camera {
    /// Camera template placed where the user clicked on the map.
    pub fn new_at(id: i64, longitude: f64, latitude: f64) -> Self {
        Self {
            id,
            name: NEW_CAMERA_NAME.to_string(),
            is_active: false,
            latitude,
            longitude,
            angle: NEW_CAMERA_ANGLE,
            direction: NEW_CAMERA_DIRECTION,
            range: NEW_CAMERA_RANGE,
        }
    }

    /// Position as `(longitude, latitude)`, the GeoJSON axis order.
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Reject records whose geometric fields are missing or non-finite.
    pub fn validate(&self) -> Result<(), CameraError> {
        let fields = [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("angle", self.angle),
            ("direction", self.direction),
            ("range", self.range),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CameraError::InvalidField {
                    id: self.id,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Apply an editor change. Slider-driven values are clamped to the
    /// editor's bounds.
    pub fn apply(&mut self, edit: CameraEdit) {
        match edit {
            CameraEdit::Name(name) => self.name = name,
            CameraEdit::Active(active) => self.is_active = active,
            CameraEdit::Direction(v) => self.direction = clamp_to(v, DIRECTION_BOUNDS),
            CameraEdit::Range(v) => self.range = clamp_to(v, RANGE_BOUNDS),
            CameraEdit::Angle(v) => self.angle = clamp_to(v, ANGLE_BOUNDS),
        }
    }
}

// NaN passes through so a broken input stays visible downstream.
#[inline]
fn clamp_to(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}

/// Decode a JSON array of camera records without validating values.
pub fn decode_cameras(json: &str) -> Result<Vec<Camera>, CameraError> {
    let cameras: Vec<Camera> = serde_json::from_str(json)?;
    log::debug!("decoded {} camera records", cameras.len());
    Ok(cameras)
}

/// Decode a JSON array of camera records, skipping (and logging) records that
/// do not decode, e.g. a missing `id`. Only a non-array input is an error.
pub fn decode_cameras_lossy(json: &str) -> Result<Vec<Camera>, CameraError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = records.len();
    let cameras = records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match Camera::deserialize(record) {
            Ok(camera) => Some(camera),
            Err(e) => {
                log::warn!("skipping camera record {i}: {e}");
                None
            }
        })
        .collect::<Vec<_>>();
    log::debug!("decoded {} of {total} camera records", cameras.len());
    Ok(cameras)
}

/// Decode a JSON array of camera records and reject any incomplete record.
pub fn decode_valid_cameras(json: &str) -> Result<Vec<Camera>, CameraError> {
    let cameras = decode_cameras(json)?;
    cameras.iter().try_for_each(Camera::validate)?;
    Ok(cameras)
}
