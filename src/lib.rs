//! Hand-tracking pointer control.
//!
//! This library turns a per-frame stream of right-hand joint positions and
//! discrete hand states from a depth sensor into:
//! - a smoothed 3D position, using one of several interchangeable filters
//! - discrete pointer control intents (move, button down/up, scroll)
//!
//! The pipeline for each frame is:
//! 1. Smooth the raw right-hand position with the active filter
//! 2. Compare hand states with the previous frame and derive button intents
//! 3. Derive lasso scroll intents from the depth offset
//! 4. Map the filtered position onto the absolute pointer space
//!
//! Sensor acquisition and OS input injection stay outside the crate: frames
//! are pushed in by the caller and intents are handed to an
//! [`control_mapper::IntentSink`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use hand_pointer::{
//!     config::Config,
//!     control_mapper::ControlIntent,
//!     pipeline::HandPipeline,
//!     sample::{FrameSample, HandState, Point3D},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = HandPipeline::from_config(&Config::default())?;
//!
//! let frame = FrameSample::new(Point3D::new(0.0, 0.0, 1.2), HandState::Closed, HandState::Open);
//! let output = pipeline.process_frame(Some(&frame));
//!
//! assert_eq!(output.intents[0], ControlIntent::ButtonDown);
//! assert_eq!(
//!     output.intents.last(),
//!     Some(&ControlIntent::PointerMoveAbsolute { x: 32767, y: 32767 })
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Filters
//!
//! ```
//! use hand_pointer::filters::{create_filter, FilterKind, PointFilter};
//! use hand_pointer::sample::Point3D;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut filter = create_filter("exp:0.5".parse::<FilterKind>()?)?;
//!
//! filter.apply(Point3D::new(0.0, 0.0, 1.0));
//! let smoothed = filter.apply(Point3D::new(0.2, 0.0, 1.0));
//! assert!((smoothed.x - 0.1).abs() < 1e-12);
//!
//! // Reset filter if needed
//! filter.reset();
//! # Ok(())
//! # }
//! ```

/// Sensor input value types
pub mod sample;

/// Point smoothing filters
pub mod filters;

/// Active filter ownership and switching
pub mod filter_selector;

/// Hand state transitions and lasso scrolling
pub mod gesture;

/// Pointer intents and position mapping
pub mod control_mapper;

/// Per-frame orchestration
pub mod pipeline;

/// Recorded frame streams
pub mod replay;

/// Numeric conversion helpers
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
