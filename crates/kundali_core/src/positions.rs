//! Per-graha ecliptic longitudes for one chart snapshot.
//!
//! Longitudes arrive from an external ephemeris provider and are treated as
//! already correct. Any planet may be absent; downstream calculators skip
//! absent planets rather than erroring.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha};

/// Optional longitude per graha, indexed by `Graha::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrahaPositions {
    longitudes: [Option<f64>; 9],
}

impl GrahaPositions {
    /// Empty snapshot with no planet placed.
    pub const fn new() -> Self {
        Self {
            longitudes: [None; 9],
        }
    }

    /// Build from (graha, longitude) pairs; rejects out-of-range longitudes.
    pub fn from_pairs(pairs: &[(Graha, f64)]) -> Result<Self, ChartError> {
        let mut positions = Self::new();
        for &(graha, lon) in pairs {
            positions.set(graha, lon)?;
        }
        Ok(positions)
    }

    /// Place one graha at a longitude in [0, 360).
    pub fn set(&mut self, graha: Graha, lon: f64) -> Result<(), ChartError> {
        if !(0.0..360.0).contains(&lon) {
            return Err(ChartError::InvalidLongitude(lon));
        }
        self.longitudes[graha.index() as usize] = Some(lon);
        Ok(())
    }

    /// Longitude of a graha, if present in this snapshot.
    pub fn get(&self, graha: Graha) -> Option<f64> {
        self.longitudes[graha.index() as usize]
    }

    /// Whether the snapshot holds a position for a graha.
    pub fn contains(&self, graha: Graha) -> bool {
        self.get(graha).is_some()
    }

    /// Iterate the grahas present, in traditional order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        ALL_GRAHAS
            .iter()
            .filter_map(|&g| self.get(g).map(|lon| (g, lon)))
    }

    /// Number of grahas present.
    pub fn len(&self) -> usize {
        self.longitudes.iter().flatten().count()
    }

    /// Whether no graha is placed.
    pub fn is_empty(&self) -> bool {
        self.longitudes.iter().all(Option::is_none)
    }
}
