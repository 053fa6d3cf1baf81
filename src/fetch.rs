use anyhow::{anyhow, bail};
use camera_map_core::{decode_valid_cameras, Camera};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::{CONNECTION_ERROR_MESSAGE, HTTP_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// Load the camera list from the cameras API.
///
/// Errors carry the message meant for the error modal; decode failures keep
/// the decoder's own message.
pub async fn fetch_cameras(url: &str) -> anyhow::Result<Vec<Camera>> {
    let window = web::window().ok_or_else(|| anyhow!(UNKNOWN_ERROR_MESSAGE))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| {
            log::warn!("fetch {url} failed: {:?}", e);
            anyhow!(CONNECTION_ERROR_MESSAGE)
        })?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|_| anyhow!(UNKNOWN_ERROR_MESSAGE))?;
    if !response.ok() {
        log::warn!("fetch {url} returned HTTP {}", response.status());
        bail!(HTTP_ERROR_MESSAGE);
    }

    let body = response
        .text()
        .map_err(|_| anyhow!(UNKNOWN_ERROR_MESSAGE))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| anyhow!(CONNECTION_ERROR_MESSAGE))?
        .as_string()
        .ok_or_else(|| anyhow!(UNKNOWN_ERROR_MESSAGE))?;

    let cameras = decode_valid_cameras(&body)?;
    log::info!("loaded {} cameras from {url}", cameras.len());
    Ok(cameras)
}
