//! Pillar interaction analysis: combinations, harmonies, clashes, harms,
//! punishments, and stem affinities among the natal pillars.
//!
//! The seven static tables live in [`tables`] as exhaustive matches over
//! branch/stem pairs; [`analyze`] scans a chart against them.

pub mod analyze;
pub mod tables;

pub use analyze::{
    InteractionKind, InteractionPolarity, InteractionSummary, PillarInteraction, analyze,
    summarize,
};
pub use tables::{
    HARMONY_TRINES, HarmonyTrine, PUNISHMENT_GROUPS, PunishmentGroup, PunishmentKind,
    pair_punishment, self_punishing, six_clash, six_combination, six_harm, stem_combination,
    three_harmony_pair,
};
