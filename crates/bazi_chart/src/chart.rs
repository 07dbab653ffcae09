//! Chart assembly: four pillars plus the ordered annotation passes.
//!
//! Annotation order matters only in one place: Ten Gods need the Day Master,
//! which exists as soon as the pillars do. Every pass is idempotent and
//! side-effect free, so a chart is built once and read everywhere.

use serde::Serialize;
use tracing::debug;

use bazi_base::{
    ElementBalance, ElementCounts, HeavenlyStem, balance, hidden_stems,
};
use bazi_calendar::{ALL_POSITIONS, BirthInput, FourPillars, four_pillars};

use crate::deities::{DeityHit, deities};
use crate::strength::{SeasonalStrength, seasonal_strength};
use crate::ten_gods::{StrongestTenGod, TenGodAnnotations, annotate, strongest};
use crate::use_god::{UseGodResult, determine};

/// A fully annotated natal chart.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub input: BirthInput,
    pub pillars: FourPillars,
    /// The Day stem, reference point for all relational scoring.
    pub day_master: HeavenlyStem,
    /// Element tally over all eight stem/branch positions.
    pub counts: ElementCounts,
    pub balance: ElementBalance,
    /// Hidden stems concealed in each branch, in chart order.
    pub hidden: [&'static [HeavenlyStem]; 4],
    pub ten_gods: TenGodAnnotations,
    pub strongest_ten_god: StrongestTenGod,
    pub seasonal_strength: SeasonalStrength,
    pub use_god: UseGodResult,
    pub deities: Vec<DeityHit>,
}

impl Chart {
    /// Build and annotate a chart from validated birth input.
    pub fn from_birth(input: BirthInput) -> Chart {
        let pillars = four_pillars(input.date, input.hour);
        let day_master = pillars.day.stem;

        let mut counts = ElementCounts::new();
        for position in ALL_POSITIONS {
            let pillar = pillars.pillar(position);
            counts.add(pillar.stem.element());
            counts.add(pillar.branch.element());
        }
        let balance = balance(&counts);

        let hidden = ALL_POSITIONS.map(|p| hidden_stems(pillars.pillar(p).branch));
        let ten_gods = annotate(&pillars);
        let strongest_ten_god = strongest(&ten_gods);
        let seasonal = seasonal_strength(day_master.element(), pillars.month.branch);
        let use_god = determine(day_master.element(), seasonal, &pillars);
        let deities = deities(&pillars);

        debug!(
            day_master = day_master.name(),
            score = use_god.score,
            "chart annotated"
        );

        Chart {
            input,
            pillars,
            day_master,
            counts,
            balance,
            hidden,
            ten_gods,
            strongest_ten_god,
            seasonal_strength: seasonal,
            use_god,
            deities,
        }
    }
}
