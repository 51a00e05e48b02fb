/// DOM ids and styling the front-end binds to.
// Element ids
pub const ID_CANVAS: &str = "demo-canvas";
pub const ID_BANDWIDTH_SLIDER: &str = "bandwidth-slider";
pub const ID_BANDWIDTH_VALUE: &str = "bandwidth-value";
pub const ID_AUTO_MODE: &str = "auto-mode";
pub const ID_DROP_ZONE: &str = "drop-zone";
pub const ID_FILE_INPUT: &str = "gif-upload";
pub const ID_DOWNLOAD_BTN: &str = "download-btn";
pub const ID_DEVICE_SELECT: &str = "device-select";
pub const ID_AGENT_LOG: &str = "agent-log";
pub const ID_CURRENT_LAYER: &str = "current-layer";
pub const ID_CURRENT_QUALITY: &str = "current-quality";
pub const ID_CURRENT_FPS: &str = "current-fps";

// Selectors
pub const PRESET_SELECTOR: &str = ".preset-btn";
pub const PRESET_ATTR: &str = "data-bandwidth";
pub const PRESET_ACTIVE_CLASS: &str = "active";
pub const HUD_SELECTOR: &str = ".player-hud";

// Drop zone border
pub const DROP_BORDER_ACTIVE: &str = "#a855f7";
pub const DROP_BORDER_IDLE: &str = "rgba(255, 255, 255, 0.1)";

// Log list
pub const LOG_ENTRY_CLASS: &str = "log-entry";
pub const CLOCK_LOCALE: &str = "en-GB"; // 24 h HH:MM:SS

// Keyboard
pub const KEY_TOGGLE_PLAYBACK: &str = " ";
