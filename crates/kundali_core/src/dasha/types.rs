//! Core types for dasha timeline calculations.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Sub-period depth produced by the default timeline operation
/// (1 = Antardasha under each Mahadasha).
pub const DEFAULT_SUB_DEPTH: u8 = 1;

/// Maximum supported subdivision depth below the Mahadasha level.
pub const MAX_SUB_DEPTH: u8 = 4;

/// One ruling period, with its proportional sub-periods nested inside.
///
/// Immutable once built; a fresh tree is produced on every computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// The graha ruling this span.
    pub graha: Graha,
    /// Start instant, JD UTC, inclusive.
    pub start_jd: f64,
    /// End instant, JD UTC, exclusive.
    pub end_jd: f64,
    /// Contiguous child periods summing to this period's duration
    /// (empty at the deepest computed level).
    pub sub_periods: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Half-open containment test: `start <= jd < end`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            graha: Graha::Ketu,
            start_jd: start,
            end_jd: end,
            sub_periods: Vec::new(),
        }
    }

    #[test]
    fn duration() {
        assert!((period(100.0, 250.0).duration_days() - 150.0).abs() < 1e-12);
    }

    #[test]
    fn contains_half_open() {
        let p = period(100.0, 200.0);
        assert!(p.contains(100.0));
        assert!(p.contains(199.999));
        assert!(!p.contains(200.0));
        assert!(!p.contains(99.999));
    }
}
