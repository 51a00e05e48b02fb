// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn parse_mbps_reads_leading_integer() {
    assert_eq!(parse_mbps("150"), Some(150.0));
    assert_eq!(parse_mbps(" 50 Mbps"), Some(50.0));
    assert_eq!(parse_mbps("1000"), Some(1000.0));
    assert_eq!(parse_mbps("2.5"), Some(2.0));
    assert_eq!(parse_mbps("-3"), Some(-3.0));
}

#[test]
fn parse_mbps_rejects_non_numbers() {
    assert_eq!(parse_mbps(""), None);
    assert_eq!(parse_mbps("fast"), None);
    assert_eq!(parse_mbps("-"), None);
    assert_eq!(parse_mbps("Mbps 50"), None);
}

#[test]
fn drop_zone_click_skips_inputs_and_hud() {
    assert!(click_opens_picker("div", false));
    assert!(click_opens_picker("canvas", false));
    assert!(!click_opens_picker("INPUT", false));
    assert!(!click_opens_picker("input", false));
    assert!(!click_opens_picker("span", true));
}

#[test]
fn space_toggles_playback_outside_form_controls() {
    assert!(is_playback_toggle(" ", "body"));
    assert!(is_playback_toggle(" ", "canvas"));
    assert!(!is_playback_toggle(" ", "INPUT"));
    assert!(!is_playback_toggle(" ", "select"));
    assert!(!is_playback_toggle(" ", "button"));
    assert!(!is_playback_toggle("Enter", "body"));
}

#[test]
fn bandwidth_readout_is_bare_number() {
    assert_eq!(bandwidth_text(100.0), "100");
    assert_eq!(bandwidth_text(273.0), "273");
}
