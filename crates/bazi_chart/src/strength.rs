//! Seasonal strength (De Ling / Shi Ling): Day-Master support from the
//! birth-month branch.
//!
//! Each element peaks in its own season window and is sapped in the window
//! of the element that controls it. Earth rules the four transition months
//! and has no opposing window.

use serde::{Deserialize, Serialize};

use bazi_base::{EarthlyBranch, Element};

/// Seasonal standing of the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalStrength {
    Strong,
    Neutral,
    Weak,
}

/// Month branches in which an element is in season.
pub const fn season_branches(element: Element) -> &'static [EarthlyBranch] {
    use EarthlyBranch as B;
    match element {
        Element::Wood => &[B::Yin, B::Mao],
        Element::Fire => &[B::Si, B::Wu],
        Element::Metal => &[B::Shen, B::You],
        Element::Water => &[B::Hai, B::Zi],
        Element::Earth => &[B::Chou, B::Chen, B::Wei, B::Xu],
    }
}

/// Month branches of the opposing (controlling) season. Empty for Earth.
pub const fn opposing_branches(element: Element) -> &'static [EarthlyBranch] {
    use EarthlyBranch as B;
    match element {
        Element::Wood => &[B::Shen, B::You],
        Element::Fire => &[B::Hai, B::Zi],
        Element::Metal => &[B::Yin, B::Mao],
        Element::Water => &[B::Si, B::Wu],
        Element::Earth => &[],
    }
}

const fn contains(branches: &[EarthlyBranch], branch: EarthlyBranch) -> bool {
    let mut i = 0;
    while i < branches.len() {
        if branches[i] as u8 == branch as u8 {
            return true;
        }
        i += 1;
    }
    false
}

/// Classify the Day Master's seasonal strength from the month branch.
pub const fn seasonal_strength(
    day_master: Element,
    month_branch: EarthlyBranch,
) -> SeasonalStrength {
    if contains(season_branches(day_master), month_branch) {
        SeasonalStrength::Strong
    } else if contains(opposing_branches(day_master), month_branch) {
        SeasonalStrength::Weak
    } else {
        SeasonalStrength::Neutral
    }
}
