// Shared tuning constants for the pixel network and page chrome.

// Grid layout
pub const CELL_SIZE: f32 = 40.0; // pixel distance between neighbouring grid points
pub const MIN_CELL_SIZE: f32 = 4.0; // smallest accepted override

// Signal cables
pub const CABLE_COUNT: usize = 10;
pub const MAX_CABLE_COUNT: usize = 1000;
pub const CABLE_SPEED_PER_FRAME: f32 = 0.01; // progress added per display frame
pub const CABLE_SPEED_PER_SEC: f32 = 0.6; // same pace at 60 Hz, for elapsed-time timing
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // clamp after tab switches / long stalls

// Drawing
pub const DOT_RADIUS: f64 = 1.0;
pub const PULSE_RADIUS: f64 = 3.0;
pub const PULSE_SHADOW_BLUR: f64 = 10.0;
pub const CABLE_LINE_WIDTH: f64 = 1.0;
pub const POINTER_LINE_WIDTH: f64 = 2.0;

// Text reveal
pub const REVEAL_DELAY_MS: i32 = 10;

// Persisted preference
pub const MODE_STORAGE_KEY: &str = "mode";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const DARK_MODE_ICON: &str = "\u{1F4A1}"; // light bulb: offers the switch to light
pub const LIGHT_MODE_ICON: &str = "\u{1F319}"; // crescent moon: offers the switch to dark

// DOM hooks
pub const CANVAS_ID: &str = "pixel-network-canvas";
pub const MODE_SWITCH_ID: &str = "mode-switch";
pub const MODE_ICON_SELECTOR: &str = ".icon";
pub const CUSTOM_CURSOR_SELECTOR: &str = ".custom-cursor";
pub const TERMINAL_TEXT_SELECTOR: &str = ".terminal-text";
pub const TYPED_TEXT_SELECTOR: &str = ".typed-text";
pub const TYPED_CLASS: &str = "typed";
pub const TEXT_DATA_ATTR: &str = "data-text";

// Hover wiring
pub const HOVER_CLASS_SELECTOR: &str = ".project-card, .skills-category, .timeline-item";
pub const HOVER_CLASS: &str = "hover-effect";
pub const HOVER_EMPHASIS_SELECTOR: &str =
    ".btn, .project-link, .control-panel-nav a, .contact-links-footer a";
