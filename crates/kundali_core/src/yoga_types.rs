//! The fixed yoga catalog: rule identities, names and descriptions.

use serde::{Deserialize, Serialize};

/// Identity of one catalog rule. Evaluation is dispatched through a direct
/// table keyed by this enum, never by name-string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaKind {
    Raja,
    Dhana,
    GajaKesari,
    BudhAditya,
    ChandraMangal,
    NeechaBhanga,
    PanchaMahapurusha,
    ViparitaRaja,
    Hamsa,
    Malavya,
    Shasha,
    Ruchaka,
    Bhadra,
}

/// All 13 catalog entries in fixed evaluation order.
pub const ALL_YOGA_KINDS: [YogaKind; 13] = [
    YogaKind::Raja,
    YogaKind::Dhana,
    YogaKind::GajaKesari,
    YogaKind::BudhAditya,
    YogaKind::ChandraMangal,
    YogaKind::NeechaBhanga,
    YogaKind::PanchaMahapurusha,
    YogaKind::ViparitaRaja,
    YogaKind::Hamsa,
    YogaKind::Malavya,
    YogaKind::Shasha,
    YogaKind::Ruchaka,
    YogaKind::Bhadra,
];

impl YogaKind {
    /// Display name of the yoga.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raja => "Raja Yoga",
            Self::Dhana => "Dhana Yoga",
            Self::GajaKesari => "Gaja Kesari",
            Self::BudhAditya => "Budh-Aditya",
            Self::ChandraMangal => "Chandra-Mangal",
            Self::NeechaBhanga => "Neecha Bhanga",
            Self::PanchaMahapurusha => "Pancha Mahapurusha",
            Self::ViparitaRaja => "Viparita Raja",
            Self::Hamsa => "Hamsa",
            Self::Malavya => "Malavya",
            Self::Shasha => "Shasha",
            Self::Ruchaka => "Ruchaka",
            Self::Bhadra => "Bhadra",
        }
    }

    /// One-line description of the combination.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Raja => "Combination of lords of trine and quadrant houses",
            Self::Dhana => "Combination indicating wealth and prosperity",
            Self::GajaKesari => "Jupiter and Moon combination in quadrant houses",
            Self::BudhAditya => "Mercury and Sun combination indicating intelligence",
            Self::ChandraMangal => "Moon and Mars combination indicating courage",
            Self::NeechaBhanga => "Cancellation of debilitation",
            Self::PanchaMahapurusha => "Planets in own/exaltation sign in angles",
            Self::ViparitaRaja => "Lords of 6th, 8th, 12th in mutual angles",
            Self::Hamsa => "Jupiter in own/exaltation sign in angle from Moon",
            Self::Malavya => "Venus in own/exaltation sign in angle from Ascendant",
            Self::Shasha => "Saturn in own/exaltation sign in angle from Ascendant",
            Self::Ruchaka => "Mars in own/exaltation sign in angle from Ascendant",
            Self::Bhadra => "Mercury in own/exaltation sign in angle from Ascendant",
        }
    }
}

/// One activated yoga. Detection output holds only activated entries, so
/// presence in the result list is the "active" flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    /// Which catalog rule fired.
    pub kind: YogaKind,
    /// Strength score in [0, 100].
    pub strength: f64,
}

impl Yoga {
    /// Display name of the underlying rule.
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Description of the underlying rule.
    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }
}
