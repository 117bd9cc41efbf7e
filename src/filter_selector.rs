//! Holds the active point filter and swaps it on request.

use crate::filters::{create_filter, FilterKind, PointFilter};
use crate::sample::Point3D;
use crate::Result;
use log::info;

/// Owns exactly one live filter together with the kind it was built from
pub struct FilterSelector {
    kind: FilterKind,
    filter: Box<dyn PointFilter>,
}

impl FilterSelector {
    /// Create a selector running `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if the kind's parameters are invalid.
    pub fn new(kind: FilterKind) -> Result<Self> {
        Ok(Self {
            kind,
            filter: create_filter(kind)?,
        })
    }

    /// Replace the active filter with a fresh instance of `kind`.
    ///
    /// The previous filter and its history are dropped even when `kind` equals
    /// the current kind. On error the current filter stays active untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind's parameters are invalid.
    pub fn set_kind(&mut self, kind: FilterKind) -> Result<()> {
        let filter = create_filter(kind)?;
        info!("Switching point filter: {} -> {}", self.kind, kind);
        self.kind = kind;
        self.filter = filter;
        Ok(())
    }

    /// Smooth one point with the active filter
    pub fn apply(&mut self, point: Point3D) -> Point3D {
        self.filter.apply(point)
    }

    /// Clear the active filter's history without changing its kind
    pub fn reset(&mut self) {
        self.filter.reset();
    }

    /// Kind of the active filter
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Name of the active filter
    #[must_use]
    pub fn filter_name(&self) -> &str {
        self.filter.name()
    }
}

impl Default for FilterSelector {
    fn default() -> Self {
        Self {
            kind: FilterKind::None,
            filter: Box::new(crate::filters::NoFilter),
        }
    }
}
