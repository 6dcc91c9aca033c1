//! Vedic planet (graha) enum and the consolidated per-graha qualities record.
//!
//! The 9 grahas form the foundation of all chart calculations. Rahu and Ketu
//! (the lunar nodes) are ordinary longitude-bearing bodies here; they carry
//! no rulership and no dasha-order specialness beyond their table entries.
//!
//! Dasha lordship years, exaltation degree and sign rulership live in one
//! record keyed by planet identity, so no two tables can ever be joined by
//! array position.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Fixed qualities of one graha, keyed by identity via [`Graha::qualities`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaQualities {
    /// Vimshottari lordship duration in years (all 9 sum to 120).
    pub dasha_years: f64,
    /// Absolute ecliptic degree of exaltation.
    pub exaltation_deg: f64,
    /// Rashis ruled by this graha (empty for Rahu/Ketu).
    pub rulership: &'static [Rashi],
}

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// The consolidated qualities record for this graha.
    ///
    /// Exaltation degrees follow the classical assignment: 10 Mesha (Sun),
    /// 3 Vrishabha (Moon), 28 Makara (Mars), 15 Kanya (Mercury), 5 Karka
    /// (Jupiter), 27 Meena (Venus), 20 Tula (Saturn), 20 Mithuna (Rahu),
    /// 20 Dhanu (Ketu), expressed as absolute longitudes.
    pub const fn qualities(self) -> GrahaQualities {
        match self {
            Self::Surya => GrahaQualities {
                dasha_years: 6.0,
                exaltation_deg: 10.0,
                rulership: &[Rashi::Simha],
            },
            Self::Chandra => GrahaQualities {
                dasha_years: 10.0,
                exaltation_deg: 33.0,
                rulership: &[Rashi::Karka],
            },
            Self::Mangal => GrahaQualities {
                dasha_years: 7.0,
                exaltation_deg: 298.0,
                rulership: &[Rashi::Mesha, Rashi::Vrischika],
            },
            Self::Buddh => GrahaQualities {
                dasha_years: 17.0,
                exaltation_deg: 165.0,
                rulership: &[Rashi::Mithuna, Rashi::Kanya],
            },
            Self::Guru => GrahaQualities {
                dasha_years: 16.0,
                exaltation_deg: 95.0,
                rulership: &[Rashi::Dhanu, Rashi::Meena],
            },
            Self::Shukra => GrahaQualities {
                dasha_years: 20.0,
                exaltation_deg: 357.0,
                rulership: &[Rashi::Vrishabha, Rashi::Tula],
            },
            Self::Shani => GrahaQualities {
                dasha_years: 19.0,
                exaltation_deg: 200.0,
                rulership: &[Rashi::Makara, Rashi::Kumbha],
            },
            Self::Rahu => GrahaQualities {
                dasha_years: 18.0,
                exaltation_deg: 80.0,
                rulership: &[],
            },
            Self::Ketu => GrahaQualities {
                dasha_years: 7.0,
                exaltation_deg: 260.0,
                rulership: &[],
            },
        }
    }

    /// Absolute ecliptic degree of debilitation (opposite the exaltation).
    pub fn debilitation_deg(self) -> f64 {
        normalize_360(self.qualities().exaltation_deg + 180.0)
    }

    /// Whether this graha rules the given rashi.
    pub fn rules(self, rashi: Rashi) -> bool {
        self.qualities().rulership.contains(&rashi)
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
