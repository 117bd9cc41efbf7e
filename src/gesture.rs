//! Hand-state transition detection and lasso scrolling.
//!
//! The tracker compares each frame's discrete hand states against the
//! previous frame and turns the transitions into button intents:
//!
//! - right hand entering `Closed` presses the button, entering any other
//!   state (`Lasso` included) releases it;
//! - right hand entering `Lasso` also captures the current depth as the
//!   scroll reference;
//! - left hand entering `Closed` produces a full click (down then up).
//!
//! While the right hand stays in `Lasso`, moving it at least
//! `move_threshold_z` toward the sensor scrolls up, away from it scrolls down.
//! The reference is only captured on entry, so depth drift is measured from
//! the entry position for as long as the lasso is held.

use crate::{
    constants::{DEFAULT_MOVE_THRESHOLD_Z, WHEEL_DELTA},
    control_mapper::ControlIntent,
    error::{Error, Result},
    sample::{FrameSample, HandState},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Discrete state transition of one hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Right hand changed pose; `z` is the filtered depth of this frame
    RightHandStateChanged { from: HandState, to: HandState, z: f64 },
    /// Left hand changed pose; `z` is the filtered right-hand depth of this frame
    LeftHandStateChanged { from: HandState, to: HandState, z: f64 },
}

/// How lasso depth offsets turn into scroll intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    /// One intent when the offset first crosses the threshold in a direction
    #[default]
    EdgeTriggered,
    /// One intent on every frame the offset is beyond the threshold
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollZone {
    Neutral,
    Up,
    Down,
}

/// Snapshot of the tracker's internal state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTrackerState {
    pub previous_right_state: HandState,
    pub previous_left_state: HandState,
    pub lasso_reference_z: f64,
    pub has_reference_z: bool,
}

/// Everything derived from one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureObservation {
    /// Transitions detected this frame, right hand first
    pub events: Vec<GestureEvent>,
    /// Button and scroll intents in emission order
    pub intents: Vec<ControlIntent>,
}

/// Edge-triggered hand state machine
pub struct GestureStateTracker {
    previous_right_state: HandState,
    previous_left_state: HandState,
    lasso_reference_z: f64,
    has_reference_z: bool,
    move_threshold_z: f64,
    scroll_amount: i32,
    scroll_mode: ScrollMode,
    scroll_zone: ScrollZone,
}

impl GestureStateTracker {
    /// Create a tracker
    ///
    /// # Errors
    ///
    /// Returns an error if `move_threshold_z` is not a positive finite number
    /// or `scroll_amount` is zero.
    pub fn new(move_threshold_z: f64, scroll_amount: i32, scroll_mode: ScrollMode) -> Result<Self> {
        if !move_threshold_z.is_finite() || move_threshold_z <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Lasso move threshold must be positive, got {move_threshold_z}"
            )));
        }
        if scroll_amount == 0 {
            return Err(Error::InvalidInput("Scroll amount must be non-zero".to_string()));
        }
        Ok(Self {
            previous_right_state: HandState::Unknown,
            previous_left_state: HandState::Unknown,
            lasso_reference_z: 0.0,
            has_reference_z: false,
            move_threshold_z,
            scroll_amount,
            scroll_mode,
            scroll_zone: ScrollZone::Neutral,
        })
    }

    /// Process one frame. `z` is the filtered right-hand depth for the frame.
    pub fn observe(&mut self, sample: &FrameSample, z: f64) -> GestureObservation {
        let mut observation = GestureObservation::default();

        if sample.right_state != self.previous_right_state {
            let event = GestureEvent::RightHandStateChanged {
                from: self.previous_right_state,
                to: sample.right_state,
                z,
            };
            debug!("{event:?}");
            observation.events.push(event);

            match sample.right_state {
                HandState::Closed => observation.intents.push(ControlIntent::ButtonDown),
                HandState::Lasso => {
                    self.lasso_reference_z = z;
                    self.has_reference_z = true;
                    self.scroll_zone = ScrollZone::Neutral;
                    observation.intents.push(ControlIntent::ButtonUp);
                }
                _ => observation.intents.push(ControlIntent::ButtonUp),
            }
        }

        if sample.left_state != self.previous_left_state {
            let event = GestureEvent::LeftHandStateChanged {
                from: self.previous_left_state,
                to: sample.left_state,
                z,
            };
            debug!("{event:?}");
            observation.events.push(event);

            if sample.left_state == HandState::Closed {
                observation.intents.push(ControlIntent::ButtonDown);
                observation.intents.push(ControlIntent::ButtonUp);
            }
        }

        self.previous_right_state = sample.right_state;
        self.previous_left_state = sample.left_state;

        if sample.right_state == HandState::Lasso && self.has_reference_z {
            if let Some(amount) = self.scroll_for_depth(z) {
                debug!("Lasso scroll {amount} (reference z {:.3}, z {z:.3})", self.lasso_reference_z);
                observation.intents.push(ControlIntent::ScrollDelta(amount));
            }
        }

        observation
    }

    fn scroll_for_depth(&mut self, z: f64) -> Option<i32> {
        let dz = self.lasso_reference_z - z;
        let zone = if dz >= self.move_threshold_z {
            ScrollZone::Up
        } else if dz <= -self.move_threshold_z {
            ScrollZone::Down
        } else {
            ScrollZone::Neutral
        };

        let entered = zone != self.scroll_zone;
        self.scroll_zone = zone;

        if self.scroll_mode == ScrollMode::EdgeTriggered && !entered {
            return None;
        }
        match zone {
            ScrollZone::Up => Some(self.scroll_amount),
            ScrollZone::Down => Some(-self.scroll_amount),
            ScrollZone::Neutral => None,
        }
    }

    /// Current internal state
    #[must_use]
    pub const fn state(&self) -> GestureTrackerState {
        GestureTrackerState {
            previous_right_state: self.previous_right_state,
            previous_left_state: self.previous_left_state,
            lasso_reference_z: self.lasso_reference_z,
            has_reference_z: self.has_reference_z,
        }
    }

    /// Configured lasso threshold in meters
    #[must_use]
    pub const fn move_threshold_z(&self) -> f64 {
        self.move_threshold_z
    }
}

impl Default for GestureStateTracker {
    fn default() -> Self {
        Self {
            previous_right_state: HandState::Unknown,
            previous_left_state: HandState::Unknown,
            lasso_reference_z: 0.0,
            has_reference_z: false,
            move_threshold_z: DEFAULT_MOVE_THRESHOLD_Z,
            scroll_amount: WHEEL_DELTA,
            scroll_mode: ScrollMode::default(),
            scroll_zone: ScrollZone::Neutral,
        }
    }
}
