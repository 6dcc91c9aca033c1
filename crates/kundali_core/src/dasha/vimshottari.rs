//! Vimshottari dasha timeline generation and ruler queries.
//!
//! The Moon's nakshatra pada at birth selects the first lord from the fixed
//! cyclic order; the elapsed fraction of that nakshatra back-dates the first
//! Mahadasha's start so that the full 9-period cycle covers exactly 120
//! years. Sub-periods at every depth follow the same cyclic rule, sized
//! proportionally to each lord's years out of 120.

use super::types::{DAYS_PER_YEAR, DEFAULT_SUB_DEPTH, DashaPeriod, MAX_SUB_DEPTH};
use crate::graha::Graha;
use crate::util::normalize_360;

/// Nakshatra width: 27 equal divisions of the ecliptic (13 deg 20 min).
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Pada (quarter-nakshatra) width.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Sum of all 9 lordship durations in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The fixed Vimshottari cyclic lord order.
///
/// Distinct from the traditional graha ordering; durations are looked up by
/// planet identity through [`Graha::qualities`], never by position in this
/// array.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Index into [`VIMSHOTTARI_SEQUENCE`] of the first Mahadasha lord.
///
/// `totalQuarters = nakshatraIndex * 4 + pada`, taken modulo 9.
pub fn starting_sequence_index(moon_lon: f64) -> usize {
    let lon = normalize_360(moon_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada = ((in_nakshatra / PADA_SPAN).floor() as usize).min(3);
    (nak_idx * 4 + pada) % 9
}

/// Fraction of the Moon's nakshatra already traversed at birth, [0, 1).
fn elapsed_nakshatra_fraction(moon_lon: f64) -> f64 {
    let lon = normalize_360(moon_lon);
    (lon % NAKSHATRA_SPAN) / NAKSHATRA_SPAN
}

/// Generate the 9-period Mahadasha timeline with one Antardasha level.
pub fn vimshottari_timeline(birth_jd: f64, moon_lon: f64) -> Vec<DashaPeriod> {
    vimshottari_timeline_with_depth(birth_jd, moon_lon, DEFAULT_SUB_DEPTH)
}

/// Generate the 9-period Mahadasha timeline, subdividing `depth` levels
/// below the Mahadashas (capped at [`MAX_SUB_DEPTH`]).
///
/// The first period's start is back-dated by the elapsed fraction of the
/// starting lord's full duration, so the 9 periods are contiguous and sum
/// to exactly 120 years.
pub fn vimshottari_timeline_with_depth(
    birth_jd: f64,
    moon_lon: f64,
    depth: u8,
) -> Vec<DashaPeriod> {
    let depth = depth.min(MAX_SUB_DEPTH);
    let start_idx = starting_sequence_index(moon_lon);

    let first_lord = VIMSHOTTARI_SEQUENCE[start_idx];
    let first_days = first_lord.qualities().dasha_years * DAYS_PER_YEAR;
    let mut cursor = birth_jd - elapsed_nakshatra_fraction(moon_lon) * first_days;

    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let graha = VIMSHOTTARI_SEQUENCE[(start_idx + offset) % VIMSHOTTARI_SEQUENCE.len()];
        let end = cursor + graha.qualities().dasha_years * DAYS_PER_YEAR;
        let mut period = DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            sub_periods: Vec::new(),
        };
        subdivide(&mut period, depth);
        periods.push(period);
        cursor = end;
    }

    periods
}

/// Recursively fill a period with 9 proportional children.
///
/// Children cycle through [`VIMSHOTTARI_SEQUENCE`] starting from the
/// parent's own lord; the i-th child gets `parent_duration * years_i / 120`.
/// The last child's end is snapped to the parent's end to absorb
/// floating-point drift.
fn subdivide(parent: &mut DashaPeriod, depth: u8) {
    if depth == 0 {
        return;
    }

    let n = VIMSHOTTARI_SEQUENCE.len();
    let parent_pos = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == parent.graha)
        .unwrap_or(0);
    let parent_duration = parent.duration_days();

    let mut children = Vec::with_capacity(n);
    let mut cursor = parent.start_jd;
    for offset in 0..n {
        let graha = VIMSHOTTARI_SEQUENCE[(parent_pos + offset) % n];
        let duration =
            parent_duration * graha.qualities().dasha_years / VIMSHOTTARI_TOTAL_YEARS;
        let end = cursor + duration;
        children.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            sub_periods: Vec::new(),
        });
        cursor = end;
    }

    // Snap before recursing so the adjustment propagates into the last
    // child's own subdivision.
    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    for child in &mut children {
        subdivide(child, depth - 1);
    }
    parent.sub_periods = children;
}

/// Find the period whose half-open span contains `query_jd`.
pub fn find_active_period(periods: &[DashaPeriod], query_jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(query_jd))
}

/// Composite "Mahadasha-Antardasha" ruler label at an explicit query instant.
///
/// Returns the Mahadasha lord alone if no Antardasha matched, and "Unknown"
/// when the instant falls outside the 120-year cycle window.
pub fn current_ruler(birth_jd: f64, moon_lon: f64, query_jd: f64) -> String {
    let timeline = vimshottari_timeline(birth_jd, moon_lon);
    match find_active_period(&timeline, query_jd) {
        Some(maha) => match find_active_period(&maha.sub_periods, query_jd) {
            Some(antar) => format!(
                "{}-{}",
                maha.graha.english_name(),
                antar.graha.english_name()
            ),
            None => maha.graha.english_name().to_string(),
        },
        None => "Unknown".to_string(),
    }
}
