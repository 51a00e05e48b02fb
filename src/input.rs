use crate::constants::KEY_TOGGLE_PLAYBACK;

/// Leading integer of a form value, the way the page's numeric attributes
/// are read (`"150"`, `" 50 Mbps"` → 50). Empty or non-numeric → `None`.
pub fn parse_mbps(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|v| sign * v)
}

/// Whether a click on the drop zone should open the file picker. Clicks on
/// the hidden file input itself or anywhere inside the player HUD do not.
#[inline]
pub fn click_opens_picker(target_tag: &str, inside_hud: bool) -> bool {
    !target_tag.eq_ignore_ascii_case("input") && !inside_hud
}

/// Space toggles playback unless focus is in a form control.
#[inline]
pub fn is_playback_toggle(key: &str, target_tag: &str) -> bool {
    key == KEY_TOGGLE_PLAYBACK
        && !matches!(
            target_tag.to_ascii_lowercase().as_str(),
            "input" | "select" | "button" | "textarea"
        )
}

/// Readout next to the slider: the bare number, no unit.
pub fn bandwidth_text(mbps: f64) -> String {
    format!("{mbps}")
}
