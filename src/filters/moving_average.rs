use std::collections::VecDeque;

use super::PointFilter;
use crate::sample::Point3D;
use crate::{Error, Result};

/// Bounded FIFO of points that only starts averaging once it has overflowed.
///
/// While at most `window` points have been pushed, [`AveragingWindow::push`]
/// returns `None` and the caller passes its input through. From the
/// `window + 1`-th point on, the oldest point is evicted and the mean of the
/// remaining `window` points is returned.
#[derive(Debug, Clone)]
pub struct AveragingWindow {
    window_size: usize,
    buffer: VecDeque<Point3D>,
}

impl AveragingWindow {
    /// Create an empty window
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` is 0.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidFilterParameter(
                "Window size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            window_size,
            buffer: VecDeque::with_capacity(window_size + 1),
        })
    }

    /// Push a point, returning the average once warmed up
    pub fn push(&mut self, point: Point3D) -> Option<Point3D> {
        self.buffer.push_back(point);
        if self.buffer.len() <= self.window_size {
            return None;
        }
        self.buffer.pop_front();
        Point3D::mean(&self.buffer)
    }

    /// Drop every buffered point
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of points currently buffered
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing is buffered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Configured window size
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }
}

/// Moving average filter
pub struct MovingAverageFilter {
    window: AveragingWindow,
}

impl MovingAverageFilter {
    /// Create a moving average over `window_size` samples
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` is 0.
    pub fn new(window_size: usize) -> Result<Self> {
        Ok(Self {
            window: AveragingWindow::new(window_size)?,
        })
    }
}

impl PointFilter for MovingAverageFilter {
    fn apply(&mut self, point: Point3D) -> Point3D {
        self.window.push(point).unwrap_or(point)
    }

    fn reset(&mut self) {
        self.window.clear();
    }

    fn name(&self) -> &str {
        "MovingAverageFilter"
    }
}
