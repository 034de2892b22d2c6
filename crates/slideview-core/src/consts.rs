/// Scale multiplier applied by one relative zoom step (in or out).
pub const ZOOM_STEP: f64 = std::f64::consts::SQRT_2;

/// Scale used for a fresh viewport and as the fallback for degenerate scales.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Canvas size hint (width, height) in screen pixels.
pub const DEFAULT_CANVAS_SIZE: (u32, u32) = (512, 512);

/// Gray level of the area behind the image, in [0.0, 1.0].
pub const DEFAULT_BACKGROUND_GRAY: f32 = 0.7;

/// Edge length of the checkerboard texture drawn behind transparent layers.
pub const DEFAULT_CHECKERBOARD_SIZE: u32 = 512;

/// Number of histogram bins per channel when none is configured.
pub const DEFAULT_HISTOGRAM_BINS: usize = 256;
