#![cfg(target_arch = "wasm32")]
use camera_map_core::{
    default_center, Camera, CameraEdit, EditorSession, DEFAULT_ZOOM, FOCUS_ZOOM, NO_SELECTION_ID,
};
use serde_json::json;
use wasm_bindgen::prelude::*;

mod constants;
mod fetch;
mod js;

use constants::{
    find_map_layer, DEFAULT_MAP_LAYER, HIGHLIGHT_FILL_COLOR, HIGHLIGHT_FILL_OPACITY,
    HIGHLIGHT_LAYER_ID, HIGHLIGHT_OUTLINE_COLOR, MAP_LAYERS, SECTOR_FILL_COLOR,
    SECTOR_FILL_OPACITY, SECTOR_LAYER_ID, SECTOR_SOURCE_ID,
};
use js::{cameras_from_js, from_js, js_error, to_js};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("camera-map-web starting");
    Ok(())
}

// ---------------- Geometry ----------------

/// Sector polygon (GeoJSON Feature) for a single camera record.
#[wasm_bindgen(js_name = buildSectorPolygon)]
pub fn build_sector_polygon(camera: JsValue) -> Result<JsValue, JsValue> {
    let camera: Camera = from_js(camera)?;
    to_js(&camera_map_core::build_sector_polygon(&camera))
}

/// GeoJSON FeatureCollection with one sector per camera, in input order.
/// Records with missing or NaN geometry give NaN sectors; records that do not
/// decode at all (e.g. no `id`) are skipped with a warning. Throws only when
/// `cameras` is not an array.
#[wasm_bindgen(js_name = buildSectorCollection)]
pub fn build_sector_collection(cameras: JsValue) -> Result<JsValue, JsValue> {
    let cameras = cameras_from_js(cameras)?;
    to_js(&camera_map_core::build_sector_collection(&cameras))
}

// ---------------- Map setup helpers ----------------

/// Filter expression for the highlight layer; no id (or -1) matches nothing.
#[wasm_bindgen(js_name = highlightFilter)]
pub fn highlight_filter(id: Option<f64>) -> Result<JsValue, JsValue> {
    let id = id.map_or(NO_SELECTION_ID, |v| v as i64);
    to_js(&json!(["==", "id", id]))
}

#[wasm_bindgen(js_name = mapLayers)]
pub fn map_layers() -> Result<JsValue, JsValue> {
    let layers = MAP_LAYERS
        .iter()
        .map(|l| json!({ "id": l.id, "name": l.name, "url": l.url }))
        .collect::<Vec<_>>();
    to_js(&json!({ "default": DEFAULT_MAP_LAYER, "layers": layers }))
}

/// Style URL for a layer id from the catalog.
#[wasm_bindgen(js_name = mapLayerUrl)]
pub fn map_layer_url(id: &str) -> Option<String> {
    find_map_layer(id).map(|l| l.url.to_string())
}

#[wasm_bindgen(js_name = defaultView)]
pub fn default_view() -> Result<JsValue, JsValue> {
    to_js(&json!({
        "center": default_center().to_array(),
        "zoom": DEFAULT_ZOOM,
        "focusZoom": FOCUS_ZOOM,
    }))
}

/// Source id, fill layer and highlight layer definitions for the map style.
#[wasm_bindgen(js_name = sectorLayers)]
pub fn sector_layers() -> Result<JsValue, JsValue> {
    to_js(&json!({
        "sourceId": SECTOR_SOURCE_ID,
        "fill": {
            "id": SECTOR_LAYER_ID,
            "type": "fill",
            "source": SECTOR_SOURCE_ID,
            "paint": { "fill-color": SECTOR_FILL_COLOR, "fill-opacity": SECTOR_FILL_OPACITY },
        },
        "highlight": {
            "id": HIGHLIGHT_LAYER_ID,
            "type": "fill",
            "source": SECTOR_SOURCE_ID,
            "paint": {
                "fill-color": HIGHLIGHT_FILL_COLOR,
                "fill-opacity": HIGHLIGHT_FILL_OPACITY,
                "fill-outline-color": HIGHLIGHT_OUTLINE_COLOR,
            },
            "filter": ["==", "id", NO_SELECTION_ID],
        },
    }))
}

// ---------------- Data ----------------

/// Fetch and validate the camera list. Rejects with the error-modal message.
#[wasm_bindgen(js_name = fetchCameras)]
pub async fn fetch_cameras(url: String) -> Result<JsValue, JsValue> {
    match fetch::fetch_cameras(&url).await {
        Ok(cameras) => to_js(&cameras),
        Err(e) => {
            log::error!("camera fetch error: {:?}", e);
            Err(js_error(e))
        }
    }
}

// ---------------- Editor ----------------

/// Editing session exposed to the map UI.
#[wasm_bindgen]
pub struct Editor {
    session: EditorSession,
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new(cameras: JsValue) -> Result<Editor, JsValue> {
        let cameras = if cameras.is_undefined() || cameras.is_null() {
            Vec::new()
        } else {
            cameras_from_js(cameras)?
        };
        Ok(Editor {
            session: EditorSession::new(cameras),
        })
    }

    #[wasm_bindgen(js_name = setCameras)]
    pub fn set_cameras(&mut self, cameras: JsValue) -> Result<(), JsValue> {
        self.session.set_cameras(cameras_from_js(cameras)?);
        Ok(())
    }

    pub fn cameras(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.cameras())
    }

    pub fn selected(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.selected())
    }

    pub fn select(&mut self, id: f64) -> Result<JsValue, JsValue> {
        let camera = self.session.select(id as i64).map_err(js_error)?;
        to_js(camera)
    }

    #[wasm_bindgen(js_name = placeNewCamera)]
    pub fn place_new_camera(&mut self, longitude: f64, latitude: f64) -> Result<JsValue, JsValue> {
        to_js(self.session.place_new_camera(longitude, latitude))
    }

    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&mut self, name: String) {
        self.session.apply_edit(CameraEdit::Name(name));
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&mut self, active: bool) {
        self.session.apply_edit(CameraEdit::Active(active));
    }

    #[wasm_bindgen(js_name = setDirection)]
    pub fn set_direction(&mut self, degrees: f64) {
        self.session.apply_edit(CameraEdit::Direction(degrees));
    }

    #[wasm_bindgen(js_name = setRange)]
    pub fn set_range(&mut self, meters: f64) {
        self.session.apply_edit(CameraEdit::Range(meters));
    }

    #[wasm_bindgen(js_name = setAngle)]
    pub fn set_angle(&mut self, degrees: f64) {
        self.session.apply_edit(CameraEdit::Angle(degrees));
    }

    /// Returns the committed camera, or `null` when nothing was open.
    pub fn commit(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.session.commit())
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    pub fn remove(&mut self, id: f64) -> Result<JsValue, JsValue> {
        let camera = self.session.remove(id as i64).map_err(js_error)?;
        to_js(&camera)
    }

    /// Data for the sector source, including the camera being edited.
    #[wasm_bindgen(js_name = sectorCollection)]
    pub fn sector_collection(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.sector_collection())
    }

    #[wasm_bindgen(js_name = highlightId)]
    pub fn highlight_id(&self) -> f64 {
        self.session.highlight_id() as f64
    }

    #[wasm_bindgen(js_name = highlightFilter)]
    pub fn highlight_filter(&self) -> Result<JsValue, JsValue> {
        to_js(&json!(["==", "id", self.session.highlight_id()]))
    }
}
