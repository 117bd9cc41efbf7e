//! Configuration management for the hand pointer pipeline

use crate::{
    constants::{
        DEFAULT_DOUBLE_EXPONENTIAL_ALPHA, DEFAULT_DOUBLE_EXPONENTIAL_GAMMA, DEFAULT_EXPONENTIAL_ALPHA,
        DEFAULT_MOVE_THRESHOLD_Z, DEFAULT_POINTER_GAIN, DEFAULT_WINDOW, WHEEL_DELTA,
    },
    filters::FilterKind,
    gesture::ScrollMode,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter configuration
    pub filter: FilterConfig,

    /// Gesture configuration
    pub gesture: GestureConfig,

    /// Pointer mapping configuration
    pub mapper: MapperConfig,
}

/// Filter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter active at startup (`none`, `sma`, `dma`, `mdma`, `exp`, `dexp`)
    pub default_filter: String,

    /// Window size for the moving average family
    pub window: usize,

    /// Exponential smoothing alpha
    pub exponential_alpha: f64,

    /// Holt level alpha
    pub double_exponential_alpha: f64,

    /// Holt trend gamma
    pub double_exponential_gamma: f64,
}

/// Gesture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Depth offset in meters from the lasso reference that triggers a scroll
    pub move_threshold_z: f64,

    /// Wheel delta per scroll intent
    pub scroll_amount: i32,

    /// `edge_triggered` or `continuous`
    pub scroll_mode: ScrollMode,
}

/// Pointer mapping configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Camera-space amplification
    pub gain: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_filter: "none".to_string(),
            window: DEFAULT_WINDOW,
            exponential_alpha: DEFAULT_EXPONENTIAL_ALPHA,
            double_exponential_alpha: DEFAULT_DOUBLE_EXPONENTIAL_ALPHA,
            double_exponential_gamma: DEFAULT_DOUBLE_EXPONENTIAL_GAMMA,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_threshold_z: DEFAULT_MOVE_THRESHOLD_Z,
            scroll_amount: WHEEL_DELTA,
            scroll_mode: ScrollMode::default(),
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            gain: DEFAULT_POINTER_GAIN,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Resolve the configured startup filter with the configured parameters
    pub fn filter_kind(&self) -> Result<FilterKind> {
        let f = &self.filter;
        let kind = match f.default_filter.to_lowercase().as_str() {
            "none" | "nofilter" => FilterKind::None,
            "sma" | "simple_moving_average" | "moving_average" => FilterKind::SimpleMovingAverage(f.window),
            "dma" | "double_moving_average" => FilterKind::DoubleMovingAverage(f.window),
            "mdma" | "modified_double_moving_average" => FilterKind::ModifiedDoubleMovingAverage(f.window),
            "exp" | "exponential" => FilterKind::ExponentialSmoothing(f.exponential_alpha),
            "dexp" | "double_exponential" => {
                FilterKind::DoubleExponentialSmoothing(f.double_exponential_alpha, f.double_exponential_gamma)
            }
            // Fully parameterised form such as `sma:7`
            name => name.parse::<FilterKind>()?,
        };
        kind.validate()?;
        Ok(kind)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Validate filter parameters
        if self.filter.window == 0 {
            return Err(Error::ConfigError(
                "Window size must be greater than 0".to_string(),
            ));
        }
        for (label, value) in [
            ("Exponential alpha", self.filter.exponential_alpha),
            ("Double exponential alpha", self.filter.double_exponential_alpha),
            ("Double exponential gamma", self.filter.double_exponential_gamma),
        ] {
            if !(value.is_finite() && value > 0.0 && value <= 1.0) {
                return Err(Error::ConfigError(format!("{label} must be in (0, 1], got {value}")));
            }
        }
        self.filter_kind()
            .map_err(|e| Error::ConfigError(format!("Invalid default filter: {e}")))?;

        // Validate gesture settings
        if !(self.gesture.move_threshold_z.is_finite() && self.gesture.move_threshold_z > 0.0) {
            return Err(Error::ConfigError(
                "Lasso move threshold must be a positive number of meters".to_string(),
            ));
        }
        if self.gesture.scroll_amount == 0 {
            return Err(Error::ConfigError("Scroll amount must be non-zero".to_string()));
        }

        // Validate mapper settings
        if !self.mapper.gain.is_finite() || self.mapper.gain == 0.0 {
            return Err(Error::ConfigError("Pointer gain must be finite and non-zero".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Pointer Configuration

# Smoothing filter
filter:
  default_filter: "none"
  window: 5
  exponential_alpha: 0.5
  double_exponential_alpha: 0.4
  double_exponential_gamma: 0.5

# Hand gestures
gesture:
  move_threshold_z: 0.05
  scroll_amount: 120
  scroll_mode: "edge_triggered"

# Pointer mapping
mapper:
  gain: 3.0
"#;
