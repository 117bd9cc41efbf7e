//! Constants used throughout the library

/// Default window size for the moving average family
pub const DEFAULT_WINDOW: usize = 5;

/// Default exponential smoothing factor
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;

/// Default Holt level smoothing factor
pub const DEFAULT_DOUBLE_EXPONENTIAL_ALPHA: f64 = 0.4;

/// Default Holt trend smoothing factor
pub const DEFAULT_DOUBLE_EXPONENTIAL_GAMMA: f64 = 0.5;

/// Depth change in meters, relative to the lasso reference, that triggers a scroll
pub const DEFAULT_MOVE_THRESHOLD_Z: f64 = 0.05;

/// One standard wheel detent
pub const WHEEL_DELTA: i32 = 120;

/// Camera-space to pointer-space amplification
pub const DEFAULT_POINTER_GAIN: f64 = 3.0;

/// Upper bound of the absolute pointer coordinate space (per axis)
pub const ABSOLUTE_AXIS_MAX: i32 = 65_535;

/// Center of the absolute pointer coordinate space (integer half of the axis)
pub const ABSOLUTE_AXIS_CENTER: i32 = ABSOLUTE_AXIS_MAX / 2;

/// Smoothing factor bounds, exclusive lower and inclusive upper
pub const SMOOTHING_FACTOR_MIN: f64 = 0.0;
pub const SMOOTHING_FACTOR_MAX: f64 = 1.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
