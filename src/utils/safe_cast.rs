//! Float to integer conversions for pointer coordinates

use crate::{Error, Result};

/// Convert f64 to i32, truncating toward zero, with bounds checking
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
pub fn f64_to_i32(value: f64) -> Result<i32> {
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(Error::InvalidInput(format!(
            "Value {value} cannot be safely converted to i32"
        )))
    }
}

/// Convert f64 to i32, truncating toward zero and saturating at the i32 range.
/// NaN maps to `nan_value`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // `as` saturates for out-of-range floats
pub fn f64_to_i32_saturating(value: f64, nan_value: i32) -> i32 {
    if value.is_nan() {
        return nan_value;
    }
    value as i32
}

/// Clamp an integer coordinate into `[min, max]`
#[must_use]
pub fn i32_clamp(value: i32, min: i32, max: i32) -> i32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    value.clamp(min, max)
}
