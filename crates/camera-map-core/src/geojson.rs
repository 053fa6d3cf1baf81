//! Minimal GeoJSON output shapes consumed by the map's `geojson` source.

use serde::Serialize;

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];

/// Properties attached to each sector; the map filters on `id`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SectorProperties {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Rings of positions; sectors always carry exactly one closed ring.
    Polygon { coordinates: Vec<Vec<Position>> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: SectorProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Feature {
    /// The outer ring of the polygon.
    pub fn ring(&self) -> &[Position] {
        match &self.geometry {
            Geometry::Polygon { coordinates } => {
                coordinates.first().map(Vec::as_slice).unwrap_or_default()
            }
        }
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_geojson_type_tags() {
        let fc = FeatureCollection {
            features: vec![Feature {
                geometry: Geometry::Polygon {
                    coordinates: vec![vec![[1.0, 2.0], [3.0, 4.0], [1.0, 2.0]]],
                },
                properties: SectorProperties { id: 9 },
            }],
        };
        let v = serde_json::to_value(&fc).unwrap();
        assert_eq!(
            v,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[1.0, 2.0], [3.0, 4.0], [1.0, 2.0]]]
                    },
                    "properties": { "id": 9 }
                }]
            })
        );
    }

    #[test]
    fn empty_collection_still_has_features_array() {
        let v = serde_json::to_value(FeatureCollection::default()).unwrap();
        assert_eq!(v, json!({ "type": "FeatureCollection", "features": [] }));
    }
}
