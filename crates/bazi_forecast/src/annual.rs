//! Annual luck (Liu Nian): the year's pillar against the natal chart.
//!
//! Only the clash and combination tables apply at the annual level; the
//! annual branch is tested against each natal branch in chart order.

use serde::{Deserialize, Serialize};

use bazi_calendar::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition, year_pillar};
use bazi_interactions::{six_clash, six_combination};
use bazi_text::{Lang, annual_description};

/// Annual-branch hit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnualInteractionKind {
    Clash,
    Combination,
}

/// One annual-branch hit against a natal pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualInteraction {
    pub kind: AnnualInteractionKind,
    pub position: PillarPosition,
    pub description: String,
}

/// The annual pillar and its hits against the natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualLuck {
    pub year: i32,
    pub pillar: Pillar,
    pub interactions: Vec<AnnualInteraction>,
}

/// Compute annual luck for a target year. An empty interaction list is a
/// valid result.
pub fn annual_luck(pillars: &FourPillars, year: i32, lang: Lang) -> AnnualLuck {
    let annual = year_pillar(year);
    let mut interactions = Vec::new();

    for position in ALL_POSITIONS {
        let natal = pillars.pillar(position).branch;
        if six_clash(annual.branch, natal) {
            interactions.push(AnnualInteraction {
                kind: AnnualInteractionKind::Clash,
                position,
                description: annual_description(position, true, lang),
            });
        }
        if six_combination(annual.branch, natal).is_some() {
            interactions.push(AnnualInteraction {
                kind: AnnualInteractionKind::Combination,
                position,
                description: annual_description(position, false, lang),
            });
        }
    }

    AnnualLuck {
        year,
        pillar: annual,
        interactions,
    }
}
