use super::moving_average::{AveragingWindow, MovingAverageFilter};
use super::PointFilter;
use crate::sample::Point3D;
use crate::Result;

/// Moving average of a moving average.
///
/// Both stages use the same window size and warm-up rule, with independent
/// buffers.
pub struct DoubleMovingAverageFilter {
    first: MovingAverageFilter,
    second: AveragingWindow,
}

impl DoubleMovingAverageFilter {
    /// Create a double moving average over `window_size` samples
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` is 0.
    pub fn new(window_size: usize) -> Result<Self> {
        Ok(Self {
            first: MovingAverageFilter::new(window_size)?,
            second: AveragingWindow::new(window_size)?,
        })
    }
}

impl PointFilter for DoubleMovingAverageFilter {
    fn apply(&mut self, point: Point3D) -> Point3D {
        let average = self.first.apply(point);
        self.second.push(average).unwrap_or(average)
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.clear();
    }

    fn name(&self) -> &str {
        "DoubleMovingAverageFilter"
    }
}

/// Double moving average with lag correction: `2·S − S2`, where `S` is the
/// simple average and `S2` the average of the last `window` values of `S`.
///
/// Outputs `S` until the second stage has warmed up.
pub struct ModifiedDoubleMovingAverageFilter {
    first: MovingAverageFilter,
    second: AveragingWindow,
}

impl ModifiedDoubleMovingAverageFilter {
    /// Create a modified double moving average over `window_size` samples
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` is 0.
    pub fn new(window_size: usize) -> Result<Self> {
        Ok(Self {
            first: MovingAverageFilter::new(window_size)?,
            second: AveragingWindow::new(window_size)?,
        })
    }
}

impl PointFilter for ModifiedDoubleMovingAverageFilter {
    fn apply(&mut self, point: Point3D) -> Point3D {
        let average = self.first.apply(point);
        match self.second.push(average) {
            Some(double_average) => average * 2.0 - double_average,
            None => average,
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.clear();
    }

    fn name(&self) -> &str {
        "ModifiedDoubleMovingAverageFilter"
    }
}
