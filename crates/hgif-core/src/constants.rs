// Shared visual tuning constants used by both web and native frontends.

// Strategy thresholds (Mbps)
pub const BW_ULTRA_MBPS: f64 = 500.0;
pub const BW_HIGH_MBPS: f64 = 100.0;
pub const BW_ENHANCED_MBPS: f64 = 50.0;
pub const BW_STANDARD_MBPS: f64 = 10.0;
pub const MIN_GPU_TIER_FOR_L2: u8 = 3;

// Background gradients (diagonal, top-left to bottom-right)
pub const BG_L2_STOPS: [(f64, &str); 3] = [(0.0, "#1a0a2e"), (0.5, "#0f1a3d"), (1.0, "#0a1628")];
pub const BG_BASE_STOPS: [(f64, &str); 2] = [(0.0, "#12121a"), (1.0, "#0a0a0f")];

// Particles
pub const PARTICLE_RGB: (u8, u8, u8) = (168, 85, 247);
pub const PARTICLE_ALPHA_L2: f64 = 0.8;
pub const PARTICLE_ALPHA_BASE: f64 = 0.4;
pub const PARTICLE_RADIUS_BASE: f64 = 2.0;
pub const PARTICLE_RADIUS_L2: f64 = 3.0; // plus sin(t + i) * PARTICLE_RADIUS_SWING
pub const PARTICLE_RADIUS_SWING: f64 = 2.0;

// Focal object
pub const FOCAL_RADIUS: f64 = 80.0;
pub const FOCAL_PULSE: f64 = 20.0; // radius swing, at 2 rad/s
pub const FOCAL_LABEL: &str = ".HGIF";
pub const RING_GAP: f64 = 18.0; // distance from the circle edge to the first ring
pub const RING_SPACING: f64 = 14.0;
pub const RING_SWEEP: f64 = std::f64::consts::FRAC_PI_2 * 1.5;
pub const RING_LINE_WIDTH: f64 = 3.0;

// Palette
pub const ACCENT_PURPLE: &str = "#a855f7";
pub const ACCENT_CYAN: &str = "#06b6d4";
pub const MUTED_GREY: &str = "#71717a";
pub const GLOW_INNER: &str = "rgba(168, 85, 247, 0.3)";
pub const GLOW_SHADOW: &str = "rgba(168, 85, 247, 0.5)";

// Uploaded image layout and overlay
pub const IMAGE_FIT: f64 = 0.7; // fraction of the canvas the image may occupy
pub const OVERLAY_DIM: &str = "rgba(10, 10, 15, 0.85)";
pub const PROGRESS_TRACK: &str = "rgba(255, 255, 255, 0.1)";
pub const PROGRESS_WIDTH_FRACTION: f64 = 0.5;
pub const PROGRESS_HEIGHT: f64 = 8.0;
pub const PROGRESS_CAPTION: &str = "HGIF AI PROCESSING...";
pub const PROGRESS_CAPTION_OFFSET: f64 = 25.0;

// Image filters
pub const ENHANCED_FILTER: &str = "contrast(1.2) saturate(1.4) brightness(1.1)";
pub const STANDARD_FILTER: &str = "contrast(1.0) grayscale(0.2)";
pub const ENHANCED_SHADOW_BLUR: f64 = 40.0;
pub const LABEL_HIGH_FIDELITY: &str = "● HIGH-FIDELITY HGIF";
pub const LABEL_STANDARD: &str = "○ STANDARD L1";
pub const LABEL_INSET: f64 = 10.0;

// Fonts
pub const FONT_FOCAL: &str = "bold 24px Inter";
pub const FONT_CAPTION: &str = "bold 16px Inter";
pub const FONT_LABEL: &str = "bold 12px JetBrains Mono";

// Export
pub const EXPORT_FILE_NAME: &str = "processed_image.hgif";
pub const EXPORT_MIME: &str = "image/png";
