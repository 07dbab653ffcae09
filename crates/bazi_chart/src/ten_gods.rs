//! Ten Gods (Shi Shen) classification.
//!
//! Each chart position relates to the Day Master through element cycle +
//! polarity, yielding exactly one of ten categories. The five cycle cases
//! are mutually exclusive for any (Day Master, target) pair, so the
//! classification is total.

use serde::{Deserialize, Serialize};

use bazi_base::{Element, ElementRelation, Polarity, relationship};
use bazi_calendar::{ALL_POSITIONS, FourPillars, PillarPosition};

/// The ten categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "七殺",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

/// Classify a target against the Day Master.
///
/// Priority: same element, then DM-generates, DM-destroys, target-destroys,
/// target-generates; within each case polarity match picks the variant.
pub const fn ten_god(
    dm_element: Element,
    dm_polarity: Polarity,
    target_element: Element,
    target_polarity: Polarity,
) -> TenGod {
    let same_polarity = dm_polarity as u8 == target_polarity as u8;
    match relationship(dm_element, target_element) {
        ElementRelation::Same => {
            if same_polarity {
                TenGod::Friend
            } else {
                TenGod::RobWealth
            }
        }
        ElementRelation::Generates => {
            if same_polarity {
                TenGod::EatingGod
            } else {
                TenGod::HurtingOfficer
            }
        }
        ElementRelation::Destroys => {
            if same_polarity {
                TenGod::IndirectWealth
            } else {
                TenGod::DirectWealth
            }
        }
        ElementRelation::None => match relationship(target_element, dm_element) {
            ElementRelation::Destroys => {
                if same_polarity {
                    TenGod::SevenKillings
                } else {
                    TenGod::DirectOfficer
                }
            }
            // Distinct elements always stand in one cycle relation, so the
            // only remaining case is target-generates-DM.
            _ => {
                if same_polarity {
                    TenGod::IndirectResource
                } else {
                    TenGod::DirectResource
                }
            }
        },
    }
}

/// Ten-God label for every stem and branch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodAnnotations {
    /// Stem classification per position in chart order. The Day stem is the
    /// Day Master itself and always reads Friend.
    pub stems: [TenGod; 4],
    /// Branch classification per position in chart order, from the branch's
    /// own element and polarity.
    pub branches: [TenGod; 4],
}

/// Annotate all eight positions against the Day Master (the Day stem).
pub fn annotate(pillars: &FourPillars) -> TenGodAnnotations {
    let dm = pillars.day.stem;
    let classify_stem = |p: PillarPosition| {
        let s = pillars.pillar(p).stem;
        ten_god(dm.element(), dm.polarity(), s.element(), s.polarity())
    };
    let classify_branch = |p: PillarPosition| {
        let b = pillars.pillar(p).branch;
        ten_god(dm.element(), dm.polarity(), b.element(), b.polarity())
    };
    TenGodAnnotations {
        stems: ALL_POSITIONS.map(classify_stem),
        branches: ALL_POSITIONS.map(classify_branch),
    }
}

/// The most frequent Ten God and its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongestTenGod {
    pub god: TenGod,
    pub count: u8,
}

/// Tally the seven positions (Day stem excluded: it is the Day Master) and
/// return the most frequent category. Ties resolve to the category seen
/// first in chart scan order.
pub fn strongest(annotations: &TenGodAnnotations) -> StrongestTenGod {
    let mut counts = [0u8; 10];
    let mut scan: Vec<TenGod> = Vec::with_capacity(7);
    for (i, &position) in ALL_POSITIONS.iter().enumerate() {
        if !matches!(position, PillarPosition::Day) {
            scan.push(annotations.stems[i]);
        }
        scan.push(annotations.branches[i]);
    }
    for god in &scan {
        counts[*god as usize] += 1;
    }
    let max = counts.iter().copied().max().unwrap_or(0);
    let god = scan
        .iter()
        .copied()
        .find(|g| counts[*g as usize] == max)
        .unwrap_or(TenGod::Friend);
    StrongestTenGod { god, count: max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::{ALL_ELEMENTS, EarthlyBranch, HeavenlyStem};
    use bazi_calendar::Pillar;

    #[test]
    fn classification_is_total() {
        // All 100 (DM, target) combinations classify; each of the 10
        // categories appears the same number of times.
        let polarities = [Polarity::Yang, Polarity::Yin];
        let mut seen = [0u32; 10];
        for dm_e in ALL_ELEMENTS {
            for dm_p in polarities {
                for t_e in ALL_ELEMENTS {
                    for t_p in polarities {
                        seen[ten_god(dm_e, dm_p, t_e, t_p) as usize] += 1;
                    }
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 10), "{seen:?}");
    }

    #[test]
    fn polarity_splits_each_cycle_case() {
        use Element::*;
        // Yang Wood day master.
        let dm = (Wood, Polarity::Yang);
        assert_eq!(ten_god(dm.0, dm.1, Wood, Polarity::Yang), TenGod::Friend);
        assert_eq!(ten_god(dm.0, dm.1, Wood, Polarity::Yin), TenGod::RobWealth);
        assert_eq!(ten_god(dm.0, dm.1, Fire, Polarity::Yang), TenGod::EatingGod);
        assert_eq!(
            ten_god(dm.0, dm.1, Fire, Polarity::Yin),
            TenGod::HurtingOfficer
        );
        assert_eq!(
            ten_god(dm.0, dm.1, Earth, Polarity::Yang),
            TenGod::IndirectWealth
        );
        assert_eq!(
            ten_god(dm.0, dm.1, Metal, Polarity::Yang),
            TenGod::SevenKillings
        );
        assert_eq!(
            ten_god(dm.0, dm.1, Metal, Polarity::Yin),
            TenGod::DirectOfficer
        );
        assert_eq!(
            ten_god(dm.0, dm.1, Water, Polarity::Yang),
            TenGod::IndirectResource
        );
        assert_eq!(
            ten_god(dm.0, dm.1, Water, Polarity::Yin),
            TenGod::DirectResource
        );
    }

    fn golden_pillars() -> FourPillars {
        FourPillars {
            year: Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Wu),
            month: Pillar::new(HeavenlyStem::Wu, EarthlyBranch::Mao),
            day: Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu),
            hour: Pillar::new(HeavenlyStem::Gui, EarthlyBranch::Wei),
        }
    }

    #[test]
    fn golden_chart_annotations() {
        let ann = annotate(&golden_pillars());
        assert_eq!(
            ann.stems,
            [
                TenGod::IndirectWealth,
                TenGod::IndirectResource,
                TenGod::Friend,
                TenGod::HurtingOfficer,
            ]
        );
        assert_eq!(
            ann.branches,
            [
                TenGod::SevenKillings,
                TenGod::DirectWealth,
                TenGod::SevenKillings,
                TenGod::DirectResource,
            ]
        );
    }

    #[test]
    fn golden_chart_strongest_is_seven_killings() {
        let ann = annotate(&golden_pillars());
        let s = strongest(&ann);
        assert_eq!(s.god, TenGod::SevenKillings);
        assert_eq!(s.count, 2);
    }

    #[test]
    fn day_stem_excluded_from_tally() {
        // A chart whose only Friend is the Day stem must not report Friend.
        let ann = annotate(&golden_pillars());
        let s = strongest(&ann);
        assert_ne!(s.god, TenGod::Friend);
    }
}
