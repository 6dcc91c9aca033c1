//! Natal chart calculators over externally supplied positions and cusps.
//!
//! This crate provides the three derived views of a birth chart:
//! - Vimshottari dasha timeline (hierarchical ruling periods)
//! - Shadbala (six-fold planetary strength)
//! - Yoga detection (13-rule combination catalog)
//!
//! All calculators are pure functions of explicit inputs plus fixed lookup
//! tables; an external orchestrator recomputes them whenever chart inputs
//! change. Ephemeris longitudes and house cusps arrive pre-validated from
//! their providers.

pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod positions;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod yoga;
pub mod yoga_types;

pub use bhava::{HouseClass, HouseCusps, house_class};
pub use dasha::{
    DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_SEQUENCE, current_ruler, vimshottari_timeline,
    vimshottari_timeline_with_depth,
};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha, GrahaQualities, rashi_lord};
pub use positions::GrahaPositions;
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use shadbala::{Shadbala, ShadbalaResult, compute_shadbala};
pub use yoga::detect_active_yogas;
pub use yoga_types::{ALL_YOGA_KINDS, Yoga, YogaKind};
