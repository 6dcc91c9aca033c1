//! Shadbala (six-fold planetary strength) computation.
//!
//! Pure math over explicit positions and cusps; nothing persists between
//! calls besides the fixed qualities tables. The six components:
//! 1. Sthana Bala (positional): rulership + exaltation proximity + house class
//! 2. Dig Bala (directional): four 3-sign bands with fixed affinities
//! 3. Kala Bala (temporal): diurnal/nocturnal sign halves
//! 4. Cheshta Bala (motional): fixed placeholder, speed data is external
//! 5. Drik Bala (aspectual): special + generic aspects from other grahas
//! 6. Naisargika Bala (natural): fixed per-graha constant
//!
//! Grahas absent from the input snapshot are simply absent from the output.

use serde::{Deserialize, Serialize};

use crate::bhava::{HouseClass, HouseCusps, house_class};
use crate::graha::{ALL_GRAHAS, Graha};
use crate::positions::GrahaPositions;
use crate::rashi::rashi_from_longitude;
use crate::util::{arc_separation, sign_index};

/// Orb within which an aspect angle is considered matched.
pub const ASPECT_ORB: f64 = 1.0;

/// Generic aspect weights: (angle, strength).
pub const TRINE: (f64, f64) = (120.0, 0.5);
pub const SEXTILE: (f64, f64) = (60.0, 0.3);
pub const CONJUNCTION: (f64, f64) = (0.0, 0.2);

/// Special full-strength aspect angles for Mars, Jupiter and Saturn,
/// as (angle, weight) pairs. All other grahas cast none.
pub const fn special_aspects(graha: Graha) -> &'static [(f64, f64)] {
    match graha {
        Graha::Mangal => &[(90.0, 0.5), (120.0, 0.75), (180.0, 1.0)],
        Graha::Guru => &[(60.0, 0.5), (120.0, 0.75), (180.0, 1.0)],
        Graha::Shani => &[(60.0, 0.5), (90.0, 0.75), (180.0, 1.0)],
        _ => &[],
    }
}

/// Six-component strength breakdown for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadbala {
    /// Positional strength.
    pub sthana: f64,
    /// Directional strength.
    pub dig: f64,
    /// Temporal strength.
    pub kala: f64,
    /// Motional strength (placeholder constant).
    pub cheshta: f64,
    /// Aspectual strength.
    pub drik: f64,
    /// Natural strength.
    pub naisargika: f64,
    /// Exact sum of the six components.
    pub total: f64,
}

/// Per-graha shadbala entries for one chart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadbalaResult {
    entries: [Option<Shadbala>; 9],
}

impl ShadbalaResult {
    /// Breakdown for a graha, if it was present in the input.
    pub fn get(&self, graha: Graha) -> Option<&Shadbala> {
        self.entries[graha.index() as usize].as_ref()
    }

    /// Total strength for a graha, if present.
    pub fn total_of(&self, graha: Graha) -> Option<f64> {
        self.get(graha).map(|s| s.total)
    }

    /// Iterate computed entries in traditional graha order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, &Shadbala)> + '_ {
        ALL_GRAHAS
            .iter()
            .filter_map(|&g| self.get(g).map(|s| (g, s)))
    }
}

/// Sthana Bala: +5 in own sign, up to +5 near exaltation, +3/+2/+1 by
/// house class (angular/succedent/cadent).
pub fn sthana_bala(graha: Graha, lon: f64, cusps: &HouseCusps) -> f64 {
    let mut strength = 0.0;

    if graha.rules(rashi_from_longitude(lon)) {
        strength += 5.0;
    }

    let exalt_dist = arc_separation(lon, graha.qualities().exaltation_deg);
    if exalt_dist < 30.0 {
        strength += (30.0 - exalt_dist) / 6.0;
    }

    strength += match house_class(cusps.house_of(lon)) {
        HouseClass::Angular => 3.0,
        HouseClass::Succedent => 2.0,
        HouseClass::Cadent => 1.0,
    };

    strength
}

/// Dig Bala: +2 when the graha stands in its affine 3-sign band.
///
/// East (Mesha..Mithuna): Guru, Buddh. North (Karka..Kanya): Chandra,
/// Shukra. West (Tula..Dhanu): Shani, Surya. South (Makara..Meena): Mangal.
pub fn dig_bala(graha: Graha, lon: f64) -> f64 {
    let band = sign_index(lon) / 3;
    let affine = match band {
        0 => matches!(graha, Graha::Guru | Graha::Buddh),
        1 => matches!(graha, Graha::Chandra | Graha::Shukra),
        2 => matches!(graha, Graha::Shani | Graha::Surya),
        _ => matches!(graha, Graha::Mangal),
    };
    if affine { 2.0 } else { 0.0 }
}

/// Kala Bala: diurnal grahas gain +2 in signs 0-5, nocturnal grahas +2 in
/// signs 6-11; Buddh always +1.
pub fn kala_bala(graha: Graha, lon: f64) -> f64 {
    let diurnal_half = sign_index(lon) < 6;
    if diurnal_half && matches!(graha, Graha::Surya | Graha::Guru | Graha::Shani) {
        2.0
    } else if !diurnal_half && matches!(graha, Graha::Chandra | Graha::Shukra | Graha::Mangal) {
        2.0
    } else if graha == Graha::Buddh {
        1.0
    } else {
        0.0
    }
}

/// Cheshta Bala placeholder. True motional strength needs daily-speed data
/// from the ephemeris provider, which this core does not consume.
pub fn cheshta_bala(_graha: Graha) -> f64 {
    1.0
}

/// Drik Bala: aspect contributions from every other placed graha.
///
/// If the aspecting graha carries a special-aspect table and the separation
/// matches an entry within [`ASPECT_ORB`], that weight is added (first
/// matching entry only). Generic trine/sextile/conjunction weights are
/// tested independently and stack with the special contribution.
pub fn drik_bala(graha: Graha, lon: f64, positions: &GrahaPositions) -> f64 {
    let mut strength = 0.0;

    for (other, other_lon) in positions.iter() {
        if other == graha {
            continue;
        }
        let sep = arc_separation(lon, other_lon);

        for &(angle, weight) in special_aspects(other) {
            if (sep - angle).abs() < ASPECT_ORB {
                strength += weight;
                break;
            }
        }

        if (sep - TRINE.0).abs() < ASPECT_ORB {
            strength += TRINE.1;
        } else if (sep - SEXTILE.0).abs() < ASPECT_ORB {
            strength += SEXTILE.1;
        } else if (sep - CONJUNCTION.0).abs() < ASPECT_ORB {
            strength += CONJUNCTION.1;
        }
    }

    strength
}

/// Naisargika Bala: fixed natural strength per graha.
pub const fn naisargika_bala(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 5.0,
        Graha::Chandra | Graha::Guru => 4.0,
        Graha::Shukra | Graha::Buddh => 3.0,
        Graha::Mangal | Graha::Shani => 2.0,
        Graha::Rahu | Graha::Ketu => 1.0,
    }
}

/// Compute the full six-fold strength for every graha present.
pub fn compute_shadbala(positions: &GrahaPositions, cusps: &HouseCusps) -> ShadbalaResult {
    let mut result = ShadbalaResult::default();

    for (graha, lon) in positions.iter() {
        let sthana = sthana_bala(graha, lon, cusps);
        let dig = dig_bala(graha, lon);
        let kala = kala_bala(graha, lon);
        let cheshta = cheshta_bala(graha);
        let drik = drik_bala(graha, lon, positions);
        let naisargika = naisargika_bala(graha);
        result.entries[graha.index() as usize] = Some(Shadbala {
            sthana,
            dig,
            kala,
            cheshta,
            drik,
            naisargika,
            total: sthana + dig + kala + cheshta + drik + naisargika,
        });
    }

    result
}
