//! Dasha (planetary period) timeline calculations.
//!
//! Implements the Vimshottari system: a 120-year, 9-graha cycle keyed off
//! the Moon's nakshatra position at birth. Periods nest hierarchically
//! (Mahadasha → Antardasha → ...) via one recursive proportional-subdivision
//! rule parameterized by depth.

pub mod types;
pub mod vimshottari;

pub use types::{DAYS_PER_YEAR, DEFAULT_SUB_DEPTH, DashaPeriod, MAX_SUB_DEPTH};
pub use vimshottari::{
    NAKSHATRA_SPAN, PADA_SPAN, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, current_ruler,
    find_active_period, starting_sequence_index, vimshottari_timeline,
    vimshottari_timeline_with_depth,
};
