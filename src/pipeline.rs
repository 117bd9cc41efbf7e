//! Per-frame orchestration of filtering, gesture tracking and pointer mapping.

use crate::{
    config::Config,
    control_mapper::{ControlIntent, ControlMapper, IntentSink},
    error::Result,
    filter_selector::FilterSelector,
    filters::FilterKind,
    gesture::{GestureEvent, GestureStateTracker},
    sample::{FrameSample, Point3D},
};
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Whether a tracked body was present on the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// No tracked body
    #[default]
    NotTracked,
    /// A body with the right-hand joint is tracked
    Tracked,
}

/// Result of processing one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// Filtered right-hand position, `None` when no body was tracked
    pub filtered: Option<Point3D>,
    /// Hand state transitions detected this frame
    pub events: Vec<GestureEvent>,
    /// Intents in emission order; the pointer move comes last
    pub intents: Vec<ControlIntent>,
}

/// Single-threaded pipeline instance owning all per-run state
pub struct HandPipeline {
    selector: FilterSelector,
    tracker: GestureStateTracker,
    mapper: ControlMapper,
    tracking: TrackingState,
    frames_processed: u64,
}

impl HandPipeline {
    /// Create a pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` has invalid parameters.
    pub fn new(kind: FilterKind, tracker: GestureStateTracker, mapper: ControlMapper) -> Result<Self> {
        Ok(Self {
            selector: FilterSelector::new(kind)?,
            tracker,
            mapper,
            tracking: TrackingState::NotTracked,
            frames_processed: 0,
        })
    }

    /// Create a pipeline from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.filter_kind()?,
            GestureStateTracker::new(
                config.gesture.move_threshold_z,
                config.gesture.scroll_amount,
                config.gesture.scroll_mode,
            )?,
            ControlMapper::new(config.mapper.gain)?,
        )
    }

    /// Process one frame, or the absence of a tracked body (`None`).
    ///
    /// Absent frames emit nothing and leave gesture state untouched.
    pub fn process_frame(&mut self, frame: Option<&FrameSample>) -> FrameOutput {
        self.frames_processed += 1;

        let Some(sample) = frame else {
            if self.tracking == TrackingState::Tracked {
                info!("Hand tracking lost");
                self.tracking = TrackingState::NotTracked;
            }
            return FrameOutput::default();
        };

        if self.tracking == TrackingState::NotTracked {
            info!("Hand tracking acquired");
            self.tracking = TrackingState::Tracked;
        }

        let filtered = self.selector.apply(sample.right_hand);
        let observation = self.tracker.observe(sample, filtered.z);

        let mut intents = observation.intents;
        intents.push(self.mapper.map(filtered));
        debug!("Frame {}: filtered {filtered}, {} intent(s)", self.frames_processed, intents.len());

        FrameOutput {
            filtered: Some(filtered),
            events: observation.events,
            intents,
        }
    }

    /// Process one frame and submit its intents to `sink` in order
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink; remaining intents of the
    /// frame are not submitted.
    pub fn process_into<S: IntentSink + ?Sized>(
        &mut self,
        frame: Option<&FrameSample>,
        sink: &mut S,
    ) -> Result<FrameOutput> {
        let output = self.process_frame(frame);
        for intent in &output.intents {
            sink.submit(*intent)?;
        }
        Ok(output)
    }

    /// Switch the smoothing filter, discarding all buffered history
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` has invalid parameters; the current filter
    /// is kept in that case.
    pub fn set_filter_kind(&mut self, kind: FilterKind) -> Result<()> {
        self.selector.set_kind(kind)
    }

    /// Active filter kind
    #[must_use]
    pub const fn filter_kind(&self) -> FilterKind {
        self.selector.kind()
    }

    /// Tracking state after the last frame
    #[must_use]
    pub const fn tracking_state(&self) -> TrackingState {
        self.tracking
    }

    /// Gesture tracker
    #[must_use]
    pub const fn tracker(&self) -> &GestureStateTracker {
        &self.tracker
    }

    /// Number of frames processed, absent frames included
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}

/// Cloneable handle serializing frame processing and filter switching
/// across threads
#[derive(Clone)]
pub struct SharedPipeline {
    inner: Arc<Mutex<HandPipeline>>,
}

impl SharedPipeline {
    /// Wrap a pipeline
    #[must_use]
    pub fn new(pipeline: HandPipeline) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pipeline)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HandPipeline> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`HandPipeline::process_frame`]
    pub fn process_frame(&self, frame: Option<&FrameSample>) -> FrameOutput {
        self.lock().process_frame(frame)
    }

    /// See [`HandPipeline::set_filter_kind`]
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` has invalid parameters.
    pub fn set_filter_kind(&self, kind: FilterKind) -> Result<()> {
        self.lock().set_filter_kind(kind)
    }

    /// Active filter kind
    #[must_use]
    pub fn filter_kind(&self) -> FilterKind {
        self.lock().filter_kind()
    }
}
