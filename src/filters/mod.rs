//! Smoothing filters for the tracked hand position.
//!
//! Each filter owns its own buffered history. Filters never share state, so
//! replacing one filter with another (see [`crate::filter_selector`]) starts
//! from an empty history.

/// Simple moving average with the warm-up passthrough rule
pub mod moving_average;

/// Double and modified double moving averages
pub mod double_moving_average;

/// Single-pole exponential smoothing
pub mod exponential;

/// Holt's linear trend (double exponential) smoothing
pub mod double_exponential;

use crate::constants::{
    DEFAULT_DOUBLE_EXPONENTIAL_ALPHA, DEFAULT_DOUBLE_EXPONENTIAL_GAMMA, DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_WINDOW,
    SMOOTHING_FACTOR_MAX, SMOOTHING_FACTOR_MIN,
};
use crate::sample::Point3D;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Trait for all point filters
pub trait PointFilter: Send + Sync {
    /// Feed one raw point and return the smoothed point
    fn apply(&mut self, point: Point3D) -> Point3D;

    /// Discard all buffered history
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct NoFilter;

impl PointFilter for NoFilter {
    fn apply(&mut self, point: Point3D) -> Point3D {
        point
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Selectable smoothing strategy together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FilterKind {
    /// Identity
    #[default]
    None,
    /// Mean of the last `window` samples
    SimpleMovingAverage(usize),
    /// Moving average of the simple moving average
    DoubleMovingAverage(usize),
    /// `2·S − S2` trend-corrected double average
    ModifiedDoubleMovingAverage(usize),
    /// Exponential smoothing with `alpha`
    ExponentialSmoothing(f64),
    /// Holt smoothing with level `alpha` and trend `gamma`
    DoubleExponentialSmoothing(f64, f64),
}

impl FilterKind {
    /// Filter selection by control-panel index.
    ///
    /// `0` none, `1` simple, `2` double, `3` modified double moving average,
    /// `4` exponential, `5` double exponential, all with default parameters.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::None),
            1 => Ok(Self::SimpleMovingAverage(DEFAULT_WINDOW)),
            2 => Ok(Self::DoubleMovingAverage(DEFAULT_WINDOW)),
            3 => Ok(Self::ModifiedDoubleMovingAverage(DEFAULT_WINDOW)),
            4 => Ok(Self::ExponentialSmoothing(DEFAULT_EXPONENTIAL_ALPHA)),
            5 => Ok(Self::DoubleExponentialSmoothing(
                DEFAULT_DOUBLE_EXPONENTIAL_ALPHA,
                DEFAULT_DOUBLE_EXPONENTIAL_GAMMA,
            )),
            _ => Err(Error::UnknownFilter(format!("Filter index {index} out of range 0..=5"))),
        }
    }

    /// Check the parameters carried by this kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterParameter`] for a zero window or a
    /// smoothing factor outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::None => Ok(()),
            Self::SimpleMovingAverage(window)
            | Self::DoubleMovingAverage(window)
            | Self::ModifiedDoubleMovingAverage(window) => validate_window(window),
            Self::ExponentialSmoothing(alpha) => validate_factor("alpha", alpha),
            Self::DoubleExponentialSmoothing(alpha, gamma) => {
                validate_factor("alpha", alpha)?;
                validate_factor("gamma", gamma)
            }
        }
    }

    /// Short name used in the textual form
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SimpleMovingAverage(_) => "sma",
            Self::DoubleMovingAverage(_) => "dma",
            Self::ModifiedDoubleMovingAverage(_) => "mdma",
            Self::ExponentialSmoothing(_) => "exp",
            Self::DoubleExponentialSmoothing(_, _) => "dexp",
        }
    }
}

fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(Error::InvalidFilterParameter(
            "Window size must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_factor(label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > SMOOTHING_FACTOR_MIN && value <= SMOOTHING_FACTOR_MAX {
        Ok(())
    } else {
        Err(Error::InvalidFilterParameter(format!(
            "{label} must be in (0, 1], got {value}"
        )))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::SimpleMovingAverage(w) | Self::DoubleMovingAverage(w) | Self::ModifiedDoubleMovingAverage(w) => {
                write!(f, "{}:{w}", self.short_name())
            }
            Self::ExponentialSmoothing(alpha) => write!(f, "exp:{alpha}"),
            Self::DoubleExponentialSmoothing(alpha, gamma) => write!(f, "dexp:{alpha}:{gamma}"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    /// Parse `name[:param[:param]]`, e.g. `sma:5`, `exp:0.3` or `dexp:0.4:0.5`
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let mut parts = lowered.split(':');
        let name = parts.next().unwrap_or_default();
        let params: Vec<&str> = parts.collect();

        let kind = match name {
            "none" | "nofilter" => {
                expect_params(s, &params, 0)?;
                Self::None
            }
            "sma" | "simple_moving_average" | "moving_average" => {
                expect_params(s, &params, 1)?;
                Self::SimpleMovingAverage(parse_window(&params, DEFAULT_WINDOW)?)
            }
            "dma" | "double_moving_average" => {
                expect_params(s, &params, 1)?;
                Self::DoubleMovingAverage(parse_window(&params, DEFAULT_WINDOW)?)
            }
            "mdma" | "modified_double_moving_average" => {
                expect_params(s, &params, 1)?;
                Self::ModifiedDoubleMovingAverage(parse_window(&params, DEFAULT_WINDOW)?)
            }
            "exp" | "exponential" => {
                expect_params(s, &params, 1)?;
                Self::ExponentialSmoothing(parse_factor(params.first(), DEFAULT_EXPONENTIAL_ALPHA)?)
            }
            "dexp" | "double_exponential" => {
                expect_params(s, &params, 2)?;
                Self::DoubleExponentialSmoothing(
                    parse_factor(params.first(), DEFAULT_DOUBLE_EXPONENTIAL_ALPHA)?,
                    parse_factor(params.get(1), DEFAULT_DOUBLE_EXPONENTIAL_GAMMA)?,
                )
            }
            _ => return Err(Error::UnknownFilter(format!("Unknown filter type: {s}"))),
        };

        kind.validate()?;
        Ok(kind)
    }
}

fn expect_params(input: &str, params: &[&str], max: usize) -> Result<()> {
    if params.len() > max {
        return Err(Error::InvalidFilterParameter(format!(
            "Too many parameters in '{input}' (at most {max})"
        )));
    }
    Ok(())
}

fn parse_window(params: &[&str], default: usize) -> Result<usize> {
    params.first().map_or(Ok(default), |raw| {
        raw.parse::<usize>()
            .map_err(|e| Error::InvalidFilterParameter(format!("Invalid window size '{raw}': {e}")))
    })
}

fn parse_factor(raw: Option<&&str>, default: f64) -> Result<f64> {
    raw.map_or(Ok(default), |raw| {
        raw.parse::<f64>()
            .map_err(|e| Error::InvalidFilterParameter(format!("Invalid smoothing factor '{raw}': {e}")))
    })
}

/// Create a point filter for the given kind
///
/// # Errors
///
/// Returns [`Error::InvalidFilterParameter`] when the kind's parameters are
/// out of range; no filter is constructed in that case.
pub fn create_filter(kind: FilterKind) -> Result<Box<dyn PointFilter>> {
    kind.validate()?;
    let filter: Box<dyn PointFilter> = match kind {
        FilterKind::None => Box::new(NoFilter),
        FilterKind::SimpleMovingAverage(window) => Box::new(moving_average::MovingAverageFilter::new(window)?),
        FilterKind::DoubleMovingAverage(window) => {
            Box::new(double_moving_average::DoubleMovingAverageFilter::new(window)?)
        }
        FilterKind::ModifiedDoubleMovingAverage(window) => {
            Box::new(double_moving_average::ModifiedDoubleMovingAverageFilter::new(window)?)
        }
        FilterKind::ExponentialSmoothing(alpha) => Box::new(exponential::ExponentialFilter::new(alpha)?),
        FilterKind::DoubleExponentialSmoothing(alpha, gamma) => {
            Box::new(double_exponential::DoubleExponentialFilter::new(alpha, gamma)?)
        }
    };
    Ok(filter)
}
