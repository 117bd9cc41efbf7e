//! Numeric helpers.

pub mod safe_cast;
