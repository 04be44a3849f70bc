// Tilt tuning constants shared by the web and native front-ends.

// Smoothing time constants (seconds)
pub const INITIAL_TAU_SEC: f32 = 0.6; // entrance drift-in
pub const TRACKING_TAU_SEC: f32 = 0.14; // live pointer tracking

// Loop keeps running while either axis is further than this from target (px)
pub const SETTLE_EPSILON: f32 = 0.05;

// Host-side "return to center finished" distance (px)
pub const RELEASE_SETTLE_DISTANCE: f32 = 0.6;

// Entrance choreography
pub const INITIAL_DURATION_MS: f64 = 1200.0;
pub const ENTRANCE_INSET_X: f32 = 70.0; // start this far from the right edge
pub const ENTRANCE_Y: f32 = 60.0;

// Parameter mapping (percent space, f64)
pub const BACKGROUND_MIN: f64 = 35.0;
pub const BACKGROUND_MAX: f64 = 65.0;
pub const ROTATE_X_DIVISOR: f64 = 5.0;
pub const ROTATE_Y_DIVISOR: f64 = 4.0;
pub const CENTER_PERCENT: f64 = 50.0;

// Default card theme
pub const DEFAULT_INNER_GRADIENT: &str = "linear-gradient(145deg,#60496e8c 0%,#71C4FF44 100%)";
pub const DEFAULT_BEHIND_GLOW_COLOR: &str = "rgba(125, 190, 255, 0.67)";
pub const DEFAULT_BEHIND_GLOW_SIZE: &str = "50%";
