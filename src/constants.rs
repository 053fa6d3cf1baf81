// Map styling, layer catalog and user-facing messages for the web frontend.
// Kept free of wasm types so host tests can `include!` it.

// Base map styles offered by the layer switcher
pub struct MapLayer {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub static MAP_LAYERS: [MapLayer; 4] = [
    MapLayer {
        id: "streets-v12",
        name: "Streets",
        url: "mapbox://styles/mapbox/streets-v12",
    },
    MapLayer {
        id: "satellite-streets-v12",
        name: "Satellite (+ streets)",
        url: "mapbox://styles/mapbox/satellite-streets-v12",
    },
    MapLayer {
        id: "light-v11",
        name: "Light",
        url: "mapbox://styles/mapbox/light-v11",
    },
    MapLayer {
        id: "dark-v11",
        name: "Dark",
        url: "mapbox://styles/mapbox/dark-v11",
    },
];

pub const DEFAULT_MAP_LAYER: &str = "streets-v12";

pub fn find_map_layer(id: &str) -> Option<&'static MapLayer> {
    MAP_LAYERS.iter().find(|l| l.id == id)
}

// Source and layer ids shared with the JS map setup
pub const SECTOR_SOURCE_ID: &str = "field-of-view";
pub const SECTOR_LAYER_ID: &str = "field-of-view-layer";
pub const HIGHLIGHT_LAYER_ID: &str = "camera-highlight-layer";

// Sector paint
pub const SECTOR_FILL_COLOR: &str = "#ff6600";
pub const SECTOR_FILL_OPACITY: f64 = 0.4;
pub const HIGHLIGHT_FILL_COLOR: &str = "#3399FF";
pub const HIGHLIGHT_FILL_OPACITY: f64 = 0.5;
pub const HIGHLIGHT_OUTLINE_COLOR: &str = "#0066CC";

// Messages shown in the error modal when the camera list cannot be loaded
pub const HTTP_ERROR_MESSAGE: &str = "Failed to load data from the external API.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error to the external API.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";
