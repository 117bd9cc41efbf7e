//! Holt's linear trend method.
//!
//! ```text
//! L_i = alpha * x_i + (1 - alpha) * (L_{i-1} + B_{i-1})
//! B_i = gamma * (L_i - L_{i-1}) + (1 - gamma) * B_{i-1}
//! ```
//!
//! The first sample seeds both the level and the trend with the raw point.

use super::{validate_factor, PointFilter};
use crate::sample::Point3D;
use crate::Result;

#[derive(Debug, Clone, Copy)]
struct HoltState {
    level: Point3D,
    trend: Point3D,
}

/// Double exponential smoothing filter
pub struct DoubleExponentialFilter {
    alpha: f64,
    gamma: f64,
    state: Option<HoltState>,
}

impl DoubleExponentialFilter {
    /// Create a double exponential smoothing filter
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` or `gamma` is not in (0, 1].
    pub fn new(alpha: f64, gamma: f64) -> Result<Self> {
        validate_factor("alpha", alpha)?;
        validate_factor("gamma", gamma)?;
        Ok(Self {
            alpha,
            gamma,
            state: None,
        })
    }

    /// Current level estimate
    #[must_use]
    pub fn level(&self) -> Option<Point3D> {
        self.state.map(|s| s.level)
    }

    /// Current trend estimate
    #[must_use]
    pub fn trend(&self) -> Option<Point3D> {
        self.state.map(|s| s.trend)
    }
}

impl PointFilter for DoubleExponentialFilter {
    fn apply(&mut self, point: Point3D) -> Point3D {
        let Some(HoltState { level, trend }) = self.state else {
            self.state = Some(HoltState {
                level: point,
                trend: point,
            });
            return point;
        };

        let next_level = point * self.alpha + (level + trend) * (1.0 - self.alpha);
        let next_trend = (next_level - level) * self.gamma + trend * (1.0 - self.gamma);

        self.state = Some(HoltState {
            level: next_level,
            trend: next_trend,
        });
        next_level
    }

    fn reset(&mut self) {
        self.state = None;
    }

    fn name(&self) -> &str {
        "DoubleExponentialFilter"
    }
}
