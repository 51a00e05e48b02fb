// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_unique_and_plain() {
    let ids = [
        ID_CANVAS,
        ID_BANDWIDTH_SLIDER,
        ID_BANDWIDTH_VALUE,
        ID_AUTO_MODE,
        ID_DROP_ZONE,
        ID_FILE_INPUT,
        ID_DOWNLOAD_BTN,
        ID_DEVICE_SELECT,
        ID_AGENT_LOG,
        ID_CURRENT_LAYER,
        ID_CURRENT_QUALITY,
        ID_CURRENT_FPS,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'), "bad id {a:?}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn drop_zone_highlight_matches_core_accent() {
    assert_eq!(DROP_BORDER_ACTIVE, hgif_core::ACCENT_PURPLE);
    assert_ne!(DROP_BORDER_ACTIVE, DROP_BORDER_IDLE);
}

#[test]
fn selectors_are_class_selectors() {
    assert!(PRESET_SELECTOR.starts_with('.'));
    assert!(HUD_SELECTOR.starts_with('.'));
    assert!(PRESET_ATTR.starts_with("data-"));
}
