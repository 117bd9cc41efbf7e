//! Pointer control intents and the mapping from hand position to pointer space.
//!
//! Intents are abstract: turning them into real input injection is the job
//! of an [`IntentSink`] implementation living outside this crate.

use crate::{
    constants::{ABSOLUTE_AXIS_CENTER, ABSOLUTE_AXIS_MAX, DEFAULT_POINTER_GAIN},
    error::{Error, Result},
    sample::Point3D,
    utils::safe_cast::{f64_to_i32, f64_to_i32_saturating, i32_clamp},
};
use log::{debug, warn};
use std::fmt;

/// An injection-independent pointer action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Move to an absolute position in `[0, 65535]` per axis (not clamped)
    PointerMoveAbsolute { x: i32, y: i32 },
    /// Press the primary button
    ButtonDown,
    /// Release the primary button
    ButtonUp,
    /// Wheel rotation, positive scrolls up
    ScrollDelta(i32),
}

impl ControlIntent {
    /// Copy of this intent with pointer coordinates clamped into the absolute
    /// coordinate space. Other intents are returned unchanged.
    #[must_use]
    pub fn clamped(self) -> Self {
        match self {
            Self::PointerMoveAbsolute { x, y } => Self::PointerMoveAbsolute {
                x: i32_clamp(x, 0, ABSOLUTE_AXIS_MAX),
                y: i32_clamp(y, 0, ABSOLUTE_AXIS_MAX),
            },
            other => other,
        }
    }
}

impl fmt::Display for ControlIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointerMoveAbsolute { x, y } => write!(f, "move {x} {y}"),
            Self::ButtonDown => f.write_str("button-down"),
            Self::ButtonUp => f.write_str("button-up"),
            Self::ScrollDelta(amount) => write!(f, "scroll {amount}"),
        }
    }
}

/// Maps a filtered hand position onto the absolute pointer coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlMapper {
    gain: f64,
}

impl ControlMapper {
    /// Create a mapper with the given gain
    ///
    /// # Errors
    ///
    /// Returns an error if `gain` is zero or not finite.
    pub fn new(gain: f64) -> Result<Self> {
        if !gain.is_finite() || gain == 0.0 {
            return Err(Error::InvalidInput(format!("Pointer gain must be finite and non-zero, got {gain}")));
        }
        Ok(Self { gain })
    }

    /// Configured gain
    #[must_use]
    pub const fn gain(&self) -> f64 {
        self.gain
    }

    /// Map camera-space `x`/`y` to an absolute pointer move.
    ///
    /// `screen_x = 32767 + x·gain·65535`, `screen_y = 32767 − y·gain·65535`,
    /// truncated toward zero. The result is not clamped; use
    /// [`ControlIntent::clamped`] before injection.
    #[must_use]
    pub fn map(&self, point: Point3D) -> ControlIntent {
        let axis = f64::from(ABSOLUTE_AXIS_MAX);
        let center = f64::from(ABSOLUTE_AXIS_CENTER);
        let x = to_axis(center + point.x * self.gain * axis);
        let y = to_axis(center - point.y * self.gain * axis);
        ControlIntent::PointerMoveAbsolute { x, y }
    }
}

fn to_axis(value: f64) -> i32 {
    f64_to_i32(value).unwrap_or_else(|e| {
        warn!("Pointer coordinate out of range: {e}");
        f64_to_i32_saturating(value, ABSOLUTE_AXIS_CENTER)
    })
}

impl Default for ControlMapper {
    fn default() -> Self {
        Self {
            gain: DEFAULT_POINTER_GAIN,
        }
    }
}

/// Output port receiving intents in emission order
pub trait IntentSink {
    /// Deliver one intent
    ///
    /// # Errors
    ///
    /// Implementations return an error when the intent could not be delivered.
    fn submit(&mut self, intent: ControlIntent) -> Result<()>;
}

/// Sink that collects intents in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    intents: Vec<ControlIntent>,
}

impl RecordingSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intents received so far
    #[must_use]
    pub fn intents(&self) -> &[ControlIntent] {
        &self.intents
    }

    /// Take the received intents, leaving the sink empty
    pub fn drain(&mut self) -> Vec<ControlIntent> {
        std::mem::take(&mut self.intents)
    }
}

impl IntentSink for RecordingSink {
    fn submit(&mut self, intent: ControlIntent) -> Result<()> {
        self.intents.push(intent);
        Ok(())
    }
}

/// Sink that only logs intents
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl IntentSink for LogSink {
    fn submit(&mut self, intent: ControlIntent) -> Result<()> {
        debug!("Intent: {intent}");
        Ok(())
    }
}
