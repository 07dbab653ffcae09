//! Use God / Avoid God (Yong Shen / Ji Shen) resolution.
//!
//! A numeric Day-Master strength score combines the seasonal standing with
//! per-position support and opposition, then picks the elements that best
//! rebalance the chart: a strong Day Master wants draining or controlling
//! elements, a weak one wants nourishment.

use serde::{Deserialize, Serialize};

use bazi_base::Element;
use bazi_calendar::{ALL_POSITIONS, FourPillars, PillarPosition};

use crate::strength::SeasonalStrength;

/// Day-Master strength classification from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMasterStrength {
    Strong,
    Weak,
    Balanced,
}

/// Favorable and unfavorable elements for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UseGodResult {
    pub strength: DayMasterStrength,
    /// Signed strength score; positive supports the Day Master.
    pub score: f64,
    pub use_god: Element,
    pub use_god_secondary: Element,
    pub avoid_god: Element,
    pub avoid_god_secondary: Element,
}

/// Numeric Day-Master strength.
///
/// Seasonal: strong +2, weak −2. Each of the seven non-Day-stem positions:
/// same element +1, resource +0.5, controller −1, output −0.5. The element
/// the Day Master controls is neutral: a drain, but also wealth.
pub fn strength_score(
    day_master: Element,
    seasonal: SeasonalStrength,
    pillars: &FourPillars,
) -> f64 {
    let mut score = match seasonal {
        SeasonalStrength::Strong => 2.0,
        SeasonalStrength::Neutral => 0.0,
        SeasonalStrength::Weak => -2.0,
    };

    let weigh = |element: Element| -> f64 {
        if element == day_master {
            1.0
        } else if element == day_master.resource() {
            0.5
        } else if element == day_master.controller() {
            -1.0
        } else if element == day_master.generates() {
            -0.5
        } else {
            0.0
        }
    };

    for position in ALL_POSITIONS {
        let pillar = pillars.pillar(position);
        if !matches!(position, PillarPosition::Day) {
            score += weigh(pillar.stem.element());
        }
        score += weigh(pillar.branch.element());
    }
    score
}

/// Resolve Use God and Avoid God from the strength score.
///
/// Score ≥ 1.5 ⇒ strong: favor output then controller, avoid the same
/// element and its resource. Score ≤ −1.5 ⇒ weak: favor resource then the
/// same element, avoid controller and output. Otherwise balanced: gentle
/// resource support, same avoid set as weak.
pub fn determine(
    day_master: Element,
    seasonal: SeasonalStrength,
    pillars: &FourPillars,
) -> UseGodResult {
    let score = strength_score(day_master, seasonal, pillars);

    let resource = day_master.resource();
    let output = day_master.generates();
    let controller = day_master.controller();

    let (strength, use_god, use_god_secondary, avoid_god, avoid_god_secondary) = if score >= 1.5 {
        (
            DayMasterStrength::Strong,
            output,
            controller,
            day_master,
            resource,
        )
    } else if score <= -1.5 {
        (
            DayMasterStrength::Weak,
            resource,
            day_master,
            controller,
            output,
        )
    } else {
        (
            DayMasterStrength::Balanced,
            resource,
            day_master,
            controller,
            output,
        )
    };

    UseGodResult {
        strength,
        score,
        use_god,
        use_god_secondary,
        avoid_god,
        avoid_god_secondary,
    }
}
