use camera_map_core::Camera;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsValue;

// Values cross the JS boundary as JS values, not JSON text, so NaN stays NaN
// both ways. Maps go out as plain objects.

pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

pub fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Decode an array of camera records, skipping (and logging) records that do
/// not decode so one bad entry does not drop the rest.
pub fn cameras_from_js(value: JsValue) -> Result<Vec<Camera>, JsValue> {
    if !js_sys::Array::is_array(&value) {
        return Err(JsValue::from_str("expected an array of cameras"));
    }
    let records = js_sys::Array::from(&value);
    let cameras = records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_wasm_bindgen::from_value::<Camera>(record) {
            Ok(camera) => Some(camera),
            Err(e) => {
                log::warn!("skipping camera record {i}: {e}");
                None
            }
        })
        .collect::<Vec<_>>();
    log::debug!("decoded {} of {} camera records", cameras.len(), records.length());
    Ok(cameras)
}

#[inline]
pub fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
