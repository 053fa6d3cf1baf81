use thiserror::Error;

/// Errors raised while decoding camera records or managing the editing session.
///
/// Sector generation itself is infallible; these only cover the data that
/// flows into it.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("failed to decode camera list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("camera {id}: field `{field}` is not a finite number ({value})")]
    InvalidField {
        id: i64,
        field: &'static str,
        value: f64,
    },

    #[error("no camera with id {0}")]
    UnknownCamera(i64),
}
