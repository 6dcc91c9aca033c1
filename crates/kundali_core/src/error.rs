//! Error types for chart calculations.
//!
//! Only boundary precondition violations surface as errors; missing
//! per-planet data degrades gracefully and never raises.

use thiserror::Error;

/// Errors from natal chart calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// House cusp input did not contain exactly 12 entries.
    #[error("expected exactly 12 house cusps, got {0}")]
    InvalidCuspCount(usize),
    /// A longitude outside [0, 360) was supplied at the boundary.
    #[error("longitude out of range [0, 360): {0}")]
    InvalidLongitude(f64),
}
