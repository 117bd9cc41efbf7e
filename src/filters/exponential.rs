use super::{validate_factor, PointFilter};
use crate::sample::Point3D;
use crate::Result;

/// Exponential smoothing filter
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<Point3D>,
}

impl ExponentialFilter {
    /// Create an exponential smoothing filter
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is not in (0, 1].
    pub fn new(alpha: f64) -> Result<Self> {
        validate_factor("alpha", alpha)?;
        Ok(Self { alpha, last: None })
    }
}

impl PointFilter for ExponentialFilter {
    fn apply(&mut self, point: Point3D) -> Point3D {
        let filtered = match self.last {
            Some(last) => point * self.alpha + last * (1.0 - self.alpha),
            None => point,
        };

        self.last = Some(filtered);
        filtered
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }
}
