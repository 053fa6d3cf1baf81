// Host-side tests for web constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn layer_catalog_ids_are_unique_and_default_exists() {
    let ids: HashSet<_> = MAP_LAYERS.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), MAP_LAYERS.len());
    assert!(find_map_layer(DEFAULT_MAP_LAYER).is_some());
    assert!(find_map_layer("no-such-style").is_none());
}

#[test]
fn layer_urls_point_at_their_style_id() {
    for layer in &MAP_LAYERS {
        assert!(layer.url.starts_with("mapbox://styles/"), "{}", layer.url);
        assert!(layer.url.ends_with(layer.id), "{}", layer.url);
        assert!(!layer.name.is_empty());
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn paint_values_are_valid() {
    for color in [SECTOR_FILL_COLOR, HIGHLIGHT_FILL_COLOR, HIGHLIGHT_OUTLINE_COLOR] {
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert!(SECTOR_FILL_OPACITY > 0.0 && SECTOR_FILL_OPACITY <= 1.0);
    assert!(HIGHLIGHT_FILL_OPACITY > 0.0 && HIGHLIGHT_FILL_OPACITY <= 1.0);
}

#[test]
fn layer_ids_share_the_sector_source_prefix() {
    assert!(SECTOR_LAYER_ID.starts_with(SECTOR_SOURCE_ID));
    assert_ne!(SECTOR_LAYER_ID, HIGHLIGHT_LAYER_ID);
}

#[test]
fn error_messages_are_distinct() {
    let msgs: HashSet<_> = [HTTP_ERROR_MESSAGE, CONNECTION_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE]
        .into_iter()
        .collect();
    assert_eq!(msgs.len(), 3);
}
