//! Per-frame input values delivered by the sensor-acquisition side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A joint position in sensor camera space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Scale every axis by `factor`
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Arithmetic mean of the given points, or `None` when there are none
    pub fn mean<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut sum = Self::default();
        let mut count = 0usize;
        for p in points {
            sum = sum + *p;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        Some(Self::new(sum.x / n, sum.y / n, sum.z / n))
    }

    /// Whether every axis is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Discrete hand pose reported by the sensor for one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandState {
    /// Sensor could not classify the hand
    #[default]
    Unknown,
    /// Hand is not tracked this frame
    NotTracked,
    /// Open palm
    Open,
    /// Closed fist
    Closed,
    /// Two fingers extended
    Lasso,
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::NotTracked => "NotTracked",
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Lasso => "Lasso",
        };
        f.write_str(name)
    }
}

/// One processed frame of a single tracked body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Raw right-hand joint position
    pub right_hand: Point3D,
    /// Right-hand pose
    pub right_state: HandState,
    /// Left-hand pose
    pub left_state: HandState,
}

impl FrameSample {
    /// Create a new frame sample
    #[must_use]
    pub const fn new(right_hand: Point3D, right_state: HandState, left_state: HandState) -> Self {
        Self {
            right_hand,
            right_state,
            left_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_mean() {
        let points = [Point3D::new(1.0, 2.0, 3.0), Point3D::new(3.0, 4.0, 5.0)];
        assert_eq!(Point3D::mean(&points), Some(Point3D::new(2.0, 3.0, 4.0)));
        assert_eq!(Point3D::mean(&[] as &[Point3D]), None);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point3D::new(1.0, 1.0, 1.0);
        let b = Point3D::new(0.5, 0.25, 2.0);
        assert_eq!(a + b, Point3D::new(1.5, 1.25, 3.0));
        assert_eq!(a - b, Point3D::new(0.5, 0.75, -1.0));
        assert_eq!(b * 2.0, Point3D::new(1.0, 0.5, 4.0));
    }

    #[test]
    fn test_hand_state_default() {
        assert_eq!(HandState::default(), HandState::Unknown);
    }

    #[test]
    fn test_frame_sample_yaml() {
        let yaml = "right_hand: { x: 0.1, y: -0.2, z: 1.5 }\nright_state: Lasso\nleft_state: Open\n";
        let sample: FrameSample = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sample.right_state, HandState::Lasso);
        assert_eq!(sample.left_state, HandState::Open);
        assert_eq!(sample.right_hand, Point3D::new(0.1, -0.2, 1.5));
    }
}
