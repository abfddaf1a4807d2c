//! Shared application-wide constants.
//! Centralizes the default values of every tunable animation knob.

// Window / canvas
/// Title of the native window.
pub const WINDOW_TITLE: &str = "Random Dots";
/// Default canvas width in pixels.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: f32 = 600.0;

// Dots
/// Number of dots spawned at startup.
pub const DOT_COUNT: usize = 10;
/// Dot diameter in pixels.
pub const DOT_SIZE: f32 = 5.0;
/// Cruising speed in pixels per frame.
pub const DOT_SPEED: f32 = 1.0;
/// Speed given to dots by a boost or deflection event.
pub const BOOST_SPEED: f32 = 8.0;
/// Radius around a pointer click inside which dots get deflected.
pub const DEFLECT_RADIUS: f32 = 150.0;

// Connections
/// Maximum center distance for two dots to be connected.
pub const MAX_LINE_DISTANCE: f32 = 200.0;
/// Maximum number of connections per dot per frame.
pub const MAX_CONNECTIONS: usize = 1;
/// Stroke width of connection lines.
pub const LINE_WIDTH: f32 = 1.0;

// Color
/// Fraction of the remaining distance covered per frame when easing colors.
pub const COLOR_CHANGE_SPEED: f32 = 0.02;
/// Per-channel distance under which a color counts as having reached its target.
pub const COLOR_CONVERGENCE_THRESHOLD: i32 = 5;
/// Lowest channel value sampled by the vivid palette.
pub const VIVID_CHANNEL_MIN: u8 = 96;

// Compositing
/// Gaussian blur radius (standard deviation, in pixels).
pub const BLUR_RADIUS: f32 = 2.0;
/// Largest accepted blur radius.
pub const MAX_BLUR_RADIUS: f32 = 64.0;
/// Blur radii at or below this leave every pixel unchanged.
pub const MIN_BLUR_RADIUS: f32 = 1e-3;

// Loop
/// Interval between animation ticks in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 20;
