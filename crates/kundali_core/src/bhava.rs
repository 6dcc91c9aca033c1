//! House (bhava) cusps and cyclic house membership.
//!
//! The 12 cusps partition the ecliptic into 12 cyclic intervals; house `i`
//! spans `[cusp[i], cusp[i+1])` with wraparound when a house straddles 0 deg.
//! Cusps arrive from an external provider and are treated as an opaque
//! partition; this module only answers membership queries.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::util::normalize_360;

/// Angular classification of a house number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseClass {
    /// Houses 1, 4, 7, 10.
    Angular,
    /// Houses 2, 5, 8, 11.
    Succedent,
    /// Houses 3, 6, 9, 12.
    Cadent,
}

/// Classify a 1-based house number.
pub const fn house_class(house: u8) -> HouseClass {
    match house {
        1 | 4 | 7 | 10 => HouseClass::Angular,
        2 | 5 | 8 | 11 => HouseClass::Succedent,
        _ => HouseClass::Cadent,
    }
}

/// The 12 ordered house cusp longitudes of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    /// Build from exactly 12 cusp longitudes in [0, 360).
    pub fn new(cusps: [f64; 12]) -> Result<Self, ChartError> {
        for &c in &cusps {
            if !(0.0..360.0).contains(&c) {
                return Err(ChartError::InvalidLongitude(c));
            }
        }
        Ok(Self { cusps })
    }

    /// Build from a provider slice; anything other than 12 entries is a
    /// boundary precondition violation.
    pub fn from_slice(cusps: &[f64]) -> Result<Self, ChartError> {
        let arr: [f64; 12] = cusps
            .try_into()
            .map_err(|_| ChartError::InvalidCuspCount(cusps.len()))?;
        Self::new(arr)
    }

    /// Equal-house cusps starting from an ascendant degree: cusp[i] = asc + i*30.
    pub fn equal_from_ascendant(asc_deg: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_360(asc_deg + (i as f64) * 30.0);
        }
        Self { cusps }
    }

    /// The raw cusp longitudes.
    pub const fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// 1-based house number containing a longitude.
    ///
    /// Each house is the half-open cyclic interval from its cusp to the
    /// next. Falls back to house 1 if no interval matched (degenerate cusp
    /// data only).
    pub fn house_of(&self, lon: f64) -> u8 {
        let lon = normalize_360(lon);
        for i in 0..12 {
            let start = self.cusps[i];
            let end = self.cusps[(i + 1) % 12];
            let inside = if start < end {
                lon >= start && lon < end
            } else {
                // House straddles 0 deg
                lon >= start || lon < end
            };
            if inside {
                return (i + 1) as u8;
            }
        }
        1
    }

    /// Whether a longitude falls in an angular house (1, 4, 7, 10).
    pub fn is_angular(&self, lon: f64) -> bool {
        house_class(self.house_of(lon)) == HouseClass::Angular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps() -> HouseCusps {
        HouseCusps::equal_from_ascendant(0.0)
    }

    #[test]
    fn from_slice_rejects_wrong_count() {
        assert_eq!(
            HouseCusps::from_slice(&[0.0; 11]),
            Err(ChartError::InvalidCuspCount(11))
        );
        assert_eq!(
            HouseCusps::from_slice(&[0.0; 13]),
            Err(ChartError::InvalidCuspCount(13))
        );
    }

    #[test]
    fn new_rejects_out_of_range() {
        let mut cusps = [0.0; 12];
        cusps[5] = 360.0;
        assert_eq!(
            HouseCusps::new(cusps),
            Err(ChartError::InvalidLongitude(360.0))
        );
    }

    #[test]
    fn house_of_equal_division() {
        let c = equal_cusps();
        assert_eq!(c.house_of(0.0), 1);
        assert_eq!(c.house_of(29.999), 1);
        assert_eq!(c.house_of(30.0), 2);
        assert_eq!(c.house_of(185.0), 7);
        assert_eq!(c.house_of(359.9), 12);
    }

    #[test]
    fn house_of_half_open_boundary() {
        // A longitude exactly on a cusp belongs to the later house.
        let c = equal_cusps();
        assert_eq!(c.house_of(90.0), 4);
    }

    #[test]
    fn house_straddling_zero() {
        // Ascendant at 345: house 1 spans [345, 15)
        let c = HouseCusps::equal_from_ascendant(345.0);
        assert_eq!(c.house_of(350.0), 1);
        assert_eq!(c.house_of(5.0), 1);
        assert_eq!(c.house_of(15.0), 2);
        assert_eq!(c.house_of(344.9), 12);
    }

    #[test]
    fn angular_classification() {
        assert_eq!(house_class(1), HouseClass::Angular);
        assert_eq!(house_class(5), HouseClass::Succedent);
        assert_eq!(house_class(12), HouseClass::Cadent);
    }

    #[test]
    fn is_angular_matches_house_of() {
        let c = equal_cusps();
        assert!(c.is_angular(0.0)); // house 1
        assert!(c.is_angular(275.0)); // house 10
        assert!(!c.is_angular(35.0)); // house 2
    }
}
