//! Pillar and four-pillar value types.

use serde::{Deserialize, Serialize};

use bazi_base::{EarthlyBranch, Element, HeavenlyStem};

/// One stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Element of the stem, the pillar's "main" element.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// Two-character Chinese rendering, e.g. "甲子".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// The four natal pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillar at a position.
    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The four branches in chart order.
    pub const fn branches(&self) -> [EarthlyBranch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }

    /// The four stems in chart order.
    pub const fn stems(&self) -> [HeavenlyStem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_chinese_rendering() {
        let p = Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Zi);
        assert_eq!(p.chinese(), "甲子");
    }

    #[test]
    fn position_lookup_matches_fields() {
        let fp = FourPillars {
            year: Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Wu),
            month: Pillar::new(HeavenlyStem::Wu, EarthlyBranch::Mao),
            day: Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu),
            hour: Pillar::new(HeavenlyStem::Gui, EarthlyBranch::Wei),
        };
        assert_eq!(fp.pillar(PillarPosition::Month), fp.month);
        assert_eq!(fp.branches()[3], EarthlyBranch::Wei);
        assert_eq!(fp.stems()[0], HeavenlyStem::Jia);
    }
}
