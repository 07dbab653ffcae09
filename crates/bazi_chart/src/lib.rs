//! Natal chart assembly and annotation.
//!
//! This crate builds the annotated Four Pillars chart: element tally and
//! balance, hidden stems, Ten Gods against the Day Master, seasonal
//! strength, Use God / Avoid God resolution, and symbolic stars.

pub mod chart;
pub mod deities;
pub mod strength;
pub mod ten_gods;
pub mod use_god;

pub use chart::Chart;
pub use deities::{DeityHit, deities, nobleman_branches, peach_blossom_branch};
pub use strength::{SeasonalStrength, opposing_branches, season_branches, seasonal_strength};
pub use ten_gods::{StrongestTenGod, TenGod, TenGodAnnotations, annotate, strongest, ten_god};
pub use use_god::{DayMasterStrength, UseGodResult, determine, strength_score};
