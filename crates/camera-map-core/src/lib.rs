//! Camera field-of-view geometry shared by the web and native frontends.

pub mod camera;
pub mod constants;
pub mod error;
pub mod geodesy;
pub mod geojson;
pub mod sector;
pub mod session;

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use geojson::*;
pub use sector::*;
pub use session::*;
