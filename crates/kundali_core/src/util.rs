//! Shared angular arithmetic for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Reflex-adjusted separation between two longitudes, in [0, 180].
///
/// `min(|a - b|, 360 - |a - b|)` after normalization.
pub fn arc_separation(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// 0-based sign index (0 = Mesha .. 11 = Meena) for a longitude.
pub fn sign_index(lon: f64) -> u8 {
    ((normalize_360(lon) / 30.0).floor() as u8).min(11)
}
