//! Two-chart compatibility scoring (He Hun).
//!
//! Five fixed-weight dimensions, additive to 0..=100:
//! - Day Master interaction (0–30)
//! - Year-branch relationship (0–25)
//! - Day-branch relationship, the Spouse Palace (0–25)
//! - Five-element complementarity of the combined tallies (0–10)
//! - Use-God synergy (0–10)
//!
//! The numeric total is symmetric in the two charts; only the directional
//! Day-Master sub-label (controls vs controlled) may differ.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bazi_base::{
    ALL_ELEMENTS, EarthlyBranch, Element, ElementCounts, ElementRelation, relationship,
};
use bazi_chart::Chart;
use bazi_interactions::{six_clash, six_combination, six_harm, three_harmony_pair};
use bazi_text::{Lang, Localized};

/// Relationship between two Day-Master elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMasterRelation {
    Generates,
    Same,
    Controls,
    Controlled,
    Neutral,
}

impl DayMasterRelation {
    /// Display label.
    pub const fn label(self) -> Localized {
        match self {
            Self::Generates => Localized {
                en: "Nourishing — One supports the other's growth",
                zh_tw: "相生——互相滋養成長",
                zh_cn: "相生——互相滋养成长",
                ko: "상생 — 서로의 성장을 돕는 관계",
            },
            Self::Same => Localized {
                en: "Kindred — Same element, deep mutual understanding",
                zh_tw: "同類——相同五行，深刻的默契",
                zh_cn: "同类——相同五行，深刻的默契",
                ko: "동류 — 같은 오행, 깊은 상호 이해",
            },
            Self::Controls => Localized {
                en: "Dominant — Person A's element controls Person B's",
                zh_tw: "主導——一方五行剋制另一方",
                zh_cn: "主导——一方五行克制另一方",
                ko: "주도 — A의 오행이 B를 극제",
            },
            Self::Controlled => Localized {
                en: "Yielding — Person B's element controls Person A's",
                zh_tw: "順從——另一方五行剋制此方",
                zh_cn: "顺从——另一方五行克制此方",
                ko: "수용 — B의 오행이 A를 극제",
            },
            Self::Neutral => Localized {
                en: "Independent — Elements don't directly interact",
                zh_tw: "獨立——五行間無直接生剋",
                zh_cn: "独立——五行间无直接生克",
                ko: "독립 — 오행 간 직접적 생극 없음",
            },
        }
    }
}

/// Relationship between two branches, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchRelation {
    SixHarmony,
    ThreeHarmony,
    Same,
    Neutral,
    SixHarm,
    SixClash,
}

impl BranchRelation {
    /// Display label.
    pub const fn label(self) -> Localized {
        match self {
            Self::SixHarmony => Localized {
                en: "Six Harmony (六合) — Deep natural bond",
                zh_tw: "六合——天生深厚的緣分",
                zh_cn: "六合——天生深厚的缘分",
                ko: "육합(六合) — 천생의 깊은 인연",
            },
            Self::ThreeHarmony => Localized {
                en: "Three Harmony (三合) — Strong affinity",
                zh_tw: "三合——強烈的吸引力",
                zh_cn: "三合——强烈的吸引力",
                ko: "삼합(三合) — 강한 친화력",
            },
            Self::Same => Localized {
                en: "Same Branch — Familiar energy",
                zh_tw: "同支——相似的能量",
                zh_cn: "同支——相似的能量",
                ko: "동지(同支) — 유사한 에너지",
            },
            Self::Neutral => Localized {
                en: "Neutral — No strong bond or conflict",
                zh_tw: "中性——無明顯合沖",
                zh_cn: "中性——无明显合冲",
                ko: "중립 — 뚜렷한 합충 없음",
            },
            Self::SixHarm => Localized {
                en: "Six Harm (六害) — Subtle friction",
                zh_tw: "六害——暗中相害",
                zh_cn: "六害——暗中相害",
                ko: "육해(六害) — 은밀한 마찰",
            },
            Self::SixClash => Localized {
                en: "Six Clash (六沖) — Direct conflict",
                zh_tw: "六沖——直接衝突",
                zh_cn: "六冲——直接冲突",
                ko: "육충(六沖) — 직접적 충돌",
            },
        }
    }
}

/// Compatibility tier at fixed thresholds 82/66/50/35.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Average,
    Challenging,
    Difficult,
}

impl Tier {
    fn from_total(total: f64) -> Tier {
        if total >= 82.0 {
            Self::Excellent
        } else if total >= 66.0 {
            Self::Good
        } else if total >= 50.0 {
            Self::Average
        } else if total >= 35.0 {
            Self::Challenging
        } else {
            Self::Difficult
        }
    }

    /// Display label.
    pub const fn label(self) -> Localized {
        match self {
            Self::Excellent => Localized {
                en: "Excellent Match (天作之合)",
                zh_tw: "天作之合",
                zh_cn: "天作之合",
                ko: "천생연분 (天作之合)",
            },
            Self::Good => Localized {
                en: "Good Match (良緣)",
                zh_tw: "良緣",
                zh_cn: "良缘",
                ko: "좋은 인연 (良緣)",
            },
            Self::Average => Localized {
                en: "Average Match (普通)",
                zh_tw: "普通",
                zh_cn: "普通",
                ko: "보통 (普通)",
            },
            Self::Challenging => Localized {
                en: "Challenging Match (需磨合)",
                zh_tw: "需要磨合",
                zh_cn: "需要磨合",
                ko: "노력 필요 (需磨合)",
            },
            Self::Difficult => Localized {
                en: "Difficult Match (相剋)",
                zh_tw: "相剋",
                zh_cn: "相克",
                ko: "상극 (相剋)",
            },
        }
    }
}

/// One scored dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub score: f64,
    pub max_score: f64,
    pub label: String,
}

/// Full compatibility breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub total: f64,
    pub tier: Tier,
    pub tier_label: String,
    pub day_master: Dimension,
    pub day_master_relation: DayMasterRelation,
    pub year_branch: Dimension,
    pub year_branch_relation: BranchRelation,
    pub day_branch: Dimension,
    pub day_branch_relation: BranchRelation,
    pub element_balance: Dimension,
    pub use_god_synergy: Dimension,
}

/// Day-Master dimension: same 22, either-direction generation 28, either
/// destruction 10, otherwise 15 (of 30).
fn score_day_master(a: Element, b: Element) -> (f64, DayMasterRelation) {
    if a == b {
        return (22.0, DayMasterRelation::Same);
    }
    let ab = relationship(a, b);
    let ba = relationship(b, a);
    if ab == ElementRelation::Generates || ba == ElementRelation::Generates {
        return (28.0, DayMasterRelation::Generates);
    }
    if ab == ElementRelation::Destroys {
        return (10.0, DayMasterRelation::Controls);
    }
    if ba == ElementRelation::Destroys {
        return (10.0, DayMasterRelation::Controlled);
    }
    (15.0, DayMasterRelation::Neutral)
}

/// Branch dimension via the shared table: six-harmony 25, three-harmony 20,
/// same 18, neutral 12, six-harm 5, six-clash 0 (of 25).
fn score_branch_pair(a: EarthlyBranch, b: EarthlyBranch) -> (f64, BranchRelation) {
    if a == b {
        return (18.0, BranchRelation::Same);
    }
    if six_combination(a, b).is_some() {
        return (25.0, BranchRelation::SixHarmony);
    }
    if three_harmony_pair(a, b).is_some() {
        return (20.0, BranchRelation::ThreeHarmony);
    }
    if six_harm(a, b) {
        return (5.0, BranchRelation::SixHarm);
    }
    if six_clash(a, b) {
        return (0.0, BranchRelation::SixClash);
    }
    (12.0, BranchRelation::Neutral)
}

/// Element complementarity: population variance of the combined tallies,
/// lower variance scoring higher (0–10).
fn score_element_complement(a: &ElementCounts, b: &ElementCounts) -> f64 {
    let combined: Vec<f64> = ALL_ELEMENTS
        .iter()
        .map(|&e| f64::from(a.count(e)) + f64::from(b.count(e)))
        .collect();
    let total: f64 = combined.iter().sum();
    if total == 0.0 {
        return 5.0;
    }
    let avg = total / 5.0;
    let variance = combined.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / 5.0;
    let score = (10.0 - variance * 0.6).max(0.0);
    (score * 10.0).round() / 10.0
}

/// Use-God synergy: +5 when the partner's chart carries ≥2 of one's Use-God
/// element, +2.5 for ≥1, per direction, capped at 10.
fn score_use_god_synergy(a: &Chart, b: &Chart) -> f64 {
    let mut score = 0.0;
    let supplies = |counts: &ElementCounts, element: Element| -> f64 {
        match counts.count(element) {
            n if n >= 2 => 5.0,
            n if n >= 1 => 2.5,
            _ => 0.0,
        }
    };
    score += supplies(&b.counts, a.use_god.use_god);
    score += supplies(&a.counts, b.use_god.use_god);
    score.min(10.0)
}

/// Compare two charts. The total equals `compatibility(b, a).total`; only
/// the Controls/Controlled sub-label flips with argument order.
pub fn compatibility(a: &Chart, b: &Chart, lang: Lang) -> CompatibilityResult {
    let (dm_score, dm_rel) = score_day_master(a.day_master.element(), b.day_master.element());
    let (year_score, year_rel) =
        score_branch_pair(a.pillars.year.branch, b.pillars.year.branch);
    let (day_score, day_rel) = score_branch_pair(a.pillars.day.branch, b.pillars.day.branch);
    let element_score = score_element_complement(&a.counts, &b.counts);
    let synergy_score = score_use_god_synergy(a, b);

    let total =
        ((dm_score + year_score + day_score + element_score + synergy_score) * 10.0).round() / 10.0;
    let tier = Tier::from_total(total);

    debug!(total, ?tier, "compatibility scored");

    CompatibilityResult {
        total,
        tier,
        tier_label: tier.label().get(lang).to_string(),
        day_master: Dimension {
            score: dm_score,
            max_score: 30.0,
            label: dm_rel.label().get(lang).to_string(),
        },
        day_master_relation: dm_rel,
        year_branch: Dimension {
            score: year_score,
            max_score: 25.0,
            label: year_rel.label().get(lang).to_string(),
        },
        year_branch_relation: year_rel,
        day_branch: Dimension {
            score: day_score,
            max_score: 25.0,
            label: day_rel.label().get(lang).to_string(),
        },
        day_branch_relation: day_rel,
        element_balance: Dimension {
            score: element_score,
            max_score: 10.0,
            label: String::new(),
        },
        use_god_synergy: Dimension {
            score: synergy_score,
            max_score: 10.0,
            label: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_calendar::{BirthInput, Gender};
    use chrono::NaiveDate;

    fn chart(date: (i32, u32, u32), hour: u32, gender: Gender) -> Chart {
        Chart::from_birth(
            BirthInput::new(
                NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                hour,
                gender,
            )
            .unwrap(),
        )
    }

    #[test]
    fn identical_charts_score_same_not_clash() {
        let a = chart((1990, 5, 15), 14, Gender::Male);
        let b = chart((1990, 5, 15), 14, Gender::Female);
        let r = compatibility(&a, &b, Lang::En);
        assert_eq!(r.day_master_relation, DayMasterRelation::Same);
        assert_eq!(r.day_master.score, 22.0);
        assert_eq!(r.year_branch_relation, BranchRelation::Same);
        assert_eq!(r.year_branch.score, 18.0);
        assert_eq!(r.day_branch_relation, BranchRelation::Same);
        assert_eq!(r.day_branch.score, 18.0);
    }

    #[test]
    fn identical_golden_charts_total() {
        // Combined tally 4/4/4/2/2: variance 0.96 → 9.4; both sides supply
        // two Earths → synergy 10. Total 22+18+18+9.4+10 = 77.4, tier good.
        let a = chart((1990, 5, 15), 14, Gender::Male);
        let r = compatibility(&a, &a, Lang::En);
        assert_eq!(r.element_balance.score, 9.4);
        assert_eq!(r.use_god_synergy.score, 10.0);
        assert_eq!(r.total, 77.4);
        assert_eq!(r.tier, Tier::Good);
    }

    #[test]
    fn numeric_score_is_symmetric() {
        let pairs = [
            ((1990, 5, 15), 14, (1992, 9, 21), 3),
            ((1985, 1, 1), 0, (2000, 12, 31), 23),
            ((1961, 7, 7), 8, (1977, 3, 30), 19),
        ];
        for (da, ha, db, hb) in pairs {
            let a = chart(da, ha, Gender::Male);
            let b = chart(db, hb, Gender::Female);
            let ab = compatibility(&a, &b, Lang::En);
            let ba = compatibility(&b, &a, Lang::En);
            assert_eq!(ab.total, ba.total, "{da:?} vs {db:?}");
        }
    }

    #[test]
    fn control_direction_flips_label_only() {
        // Wood destroys Earth: both directions score 10, labels differ.
        let (score_ab, rel_ab) = score_day_master(Element::Wood, Element::Earth);
        let (score_ba, rel_ba) = score_day_master(Element::Earth, Element::Wood);
        assert_eq!(score_ab, score_ba);
        assert_eq!(rel_ab, DayMasterRelation::Controls);
        assert_eq!(rel_ba, DayMasterRelation::Controlled);
    }

    #[test]
    fn generation_beats_same() {
        let (same, _) = score_day_master(Element::Fire, Element::Fire);
        let (generates, rel) = score_day_master(Element::Wood, Element::Fire);
        assert!(generates > same);
        assert_eq!(rel, DayMasterRelation::Generates);
    }

    #[test]
    fn branch_table_ordering() {
        use EarthlyBranch as B;
        assert_eq!(score_branch_pair(B::Zi, B::Chou).0, 25.0);
        assert_eq!(score_branch_pair(B::Shen, B::Chen).0, 20.0);
        assert_eq!(score_branch_pair(B::Zi, B::Zi).0, 18.0);
        assert_eq!(score_branch_pair(B::Zi, B::Yin).0, 12.0);
        assert_eq!(score_branch_pair(B::Zi, B::Wei).0, 5.0);
        assert_eq!(score_branch_pair(B::Zi, B::Wu).0, 0.0);
    }

    #[test]
    fn totals_stay_in_range() {
        let dates = [
            ((1900, 1, 1), 0),
            ((1955, 6, 18), 11),
            ((1990, 5, 15), 14),
            ((2024, 2, 29), 23),
        ];
        for (da, ha) in dates {
            for (db, hb) in dates {
                let a = chart(da, ha, Gender::Male);
                let b = chart(db, hb, Gender::Female);
                let r = compatibility(&a, &b, Lang::En);
                assert!((0.0..=100.0).contains(&r.total), "{}", r.total);
            }
        }
    }
}
