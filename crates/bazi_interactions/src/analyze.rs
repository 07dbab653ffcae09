//! Natal pillar interaction analysis.
//!
//! Scans the six branch pairs and six stem pairs of a chart against the
//! static tables, plus trio membership for the four harmony trines and the
//! two punishment groups. An empty result list is a valid outcome.

use serde::{Deserialize, Serialize};

use bazi_base::Element;
use bazi_calendar::{ALL_POSITIONS, FourPillars, PillarPosition};

use crate::tables::{
    HARMONY_TRINES, PUNISHMENT_GROUPS, PunishmentKind, pair_punishment, self_punishing,
    six_clash, six_combination, six_harm, stem_combination,
};

/// Interaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    SixCombination,
    ThreeHarmony,
    SixClash,
    SixHarm,
    Punishment,
    SelfPunishment,
    StemCombination,
}

/// Whether an interaction helps or hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionPolarity {
    Positive,
    Negative,
    Neutral,
}

impl InteractionKind {
    /// Fixed polarity per category. Neutral is reserved for annual overlays
    /// that neither bond nor clash.
    pub const fn polarity(self) -> InteractionPolarity {
        match self {
            Self::SixCombination | Self::ThreeHarmony | Self::StemCombination => {
                InteractionPolarity::Positive
            }
            Self::SixClash | Self::SixHarm | Self::Punishment | Self::SelfPunishment => {
                InteractionPolarity::Negative
            }
        }
    }
}

/// One detected interaction among natal pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarInteraction {
    pub kind: InteractionKind,
    /// Participating positions, chart order.
    pub positions: Vec<PillarPosition>,
    /// Element a combination or harmony merges into.
    pub element: Option<Element>,
    /// Punishment group classification, for punishment kinds.
    pub punishment: Option<PunishmentKind>,
    /// True for a two-of-three harmony or punishment.
    pub partial: bool,
    pub polarity: InteractionPolarity,
}

impl PillarInteraction {
    fn pair(kind: InteractionKind, a: PillarPosition, b: PillarPosition) -> Self {
        Self {
            kind,
            positions: vec![a, b],
            element: None,
            punishment: None,
            partial: false,
            polarity: kind.polarity(),
        }
    }
}

/// Positive/negative tally over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub positive: usize,
    pub negative: usize,
    pub total: usize,
}

/// Tally polarity over detected interactions.
pub fn summarize(interactions: &[PillarInteraction]) -> InteractionSummary {
    let positive = interactions
        .iter()
        .filter(|i| i.polarity == InteractionPolarity::Positive)
        .count();
    let negative = interactions
        .iter()
        .filter(|i| i.polarity == InteractionPolarity::Negative)
        .count();
    InteractionSummary {
        positive,
        negative,
        total: interactions.len(),
    }
}

/// Find all interactions among the natal pillars.
pub fn analyze(pillars: &FourPillars) -> Vec<PillarInteraction> {
    let mut out = Vec::new();

    // Branch pair scans.
    for (i, &pa) in ALL_POSITIONS.iter().enumerate() {
        for &pb in &ALL_POSITIONS[i + 1..] {
            let a = pillars.pillar(pa).branch;
            let b = pillars.pillar(pb).branch;

            if let Some(element) = six_combination(a, b) {
                out.push(PillarInteraction {
                    element: Some(element),
                    ..PillarInteraction::pair(InteractionKind::SixCombination, pa, pb)
                });
            }
            if six_clash(a, b) {
                out.push(PillarInteraction::pair(InteractionKind::SixClash, pa, pb));
            }
            if six_harm(a, b) {
                out.push(PillarInteraction::pair(InteractionKind::SixHarm, pa, pb));
            }
            if pair_punishment(a, b) {
                out.push(PillarInteraction {
                    punishment: Some(PunishmentKind::Rude),
                    ..PillarInteraction::pair(InteractionKind::Punishment, pa, pb)
                });
            }
            if a == b && self_punishing(a) {
                out.push(PillarInteraction::pair(
                    InteractionKind::SelfPunishment,
                    pa,
                    pb,
                ));
            }
        }
    }

    // Harmony trines: full with three members present, partial with two.
    for trine in &HARMONY_TRINES {
        let present: Vec<PillarPosition> = ALL_POSITIONS
            .into_iter()
            .filter(|&p| trine.branches.contains(&pillars.pillar(p).branch))
            .collect();
        if present.len() >= 3 {
            out.push(PillarInteraction {
                kind: InteractionKind::ThreeHarmony,
                positions: present[..3].to_vec(),
                element: Some(trine.element),
                punishment: None,
                partial: false,
                polarity: InteractionPolarity::Positive,
            });
        } else if present.len() == 2 {
            out.push(PillarInteraction {
                kind: InteractionKind::ThreeHarmony,
                positions: present,
                element: Some(trine.element),
                punishment: None,
                partial: true,
                polarity: InteractionPolarity::Positive,
            });
        }
    }

    // Punishment groups: two of three present already counts.
    for group in &PUNISHMENT_GROUPS {
        let present: Vec<PillarPosition> = ALL_POSITIONS
            .into_iter()
            .filter(|&p| group.branches.contains(&pillars.pillar(p).branch))
            .collect();
        if present.len() >= 2 {
            let partial = present.len() < 3;
            out.push(PillarInteraction {
                kind: InteractionKind::Punishment,
                positions: present,
                element: None,
                punishment: Some(group.kind),
                partial,
                polarity: InteractionPolarity::Negative,
            });
        }
    }

    // Stem combination scan.
    for (i, &pa) in ALL_POSITIONS.iter().enumerate() {
        for &pb in &ALL_POSITIONS[i + 1..] {
            let a = pillars.pillar(pa).stem;
            let b = pillars.pillar(pb).stem;
            if let Some(element) = stem_combination(a, b) {
                out.push(PillarInteraction {
                    element: Some(element),
                    ..PillarInteraction::pair(InteractionKind::StemCombination, pa, pb)
                });
            }
        }
    }

    out
}
