//! The seven static interaction tables, as exhaustive matches over branch
//! and stem index pairs.
//!
//! Pairs are order-independent: every predicate normalizes to (low, high)
//! before matching. A branch pair matches at most one of combination,
//! clash, or harm; self-punishment is an orthogonal same-branch check.

use serde::{Deserialize, Serialize};

use bazi_base::{EarthlyBranch, Element, HeavenlyStem};

const fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Six Combinations (Liu He): harmonious pairs merging into an element.
pub const fn six_combination(a: EarthlyBranch, b: EarthlyBranch) -> Option<Element> {
    match ordered(a.index(), b.index()) {
        (0, 1) => Some(Element::Earth),  // 子丑合土
        (2, 11) => Some(Element::Wood),  // 寅亥合木
        (3, 10) => Some(Element::Fire),  // 卯戌合火
        (4, 9) => Some(Element::Metal),  // 辰酉合金
        (5, 8) => Some(Element::Water),  // 巳申合水
        (6, 7) => Some(Element::Fire),   // 午未合火
        _ => None,
    }
}

/// Six Clashes (Liu Chong): pairs six steps apart.
pub const fn six_clash(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    matches!(
        ordered(a.index(), b.index()),
        (0, 6) | (1, 7) | (2, 8) | (3, 9) | (4, 10) | (5, 11)
    )
}

/// Six Harms (Liu Hai): subtly undermining pairs.
pub const fn six_harm(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    matches!(
        ordered(a.index(), b.index()),
        (0, 7) | (1, 6) | (2, 5) | (3, 4) | (8, 11) | (9, 10)
    )
}

/// The Zi-Mao pair punishment (Wu Li / rude punishment).
pub const fn pair_punishment(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    matches!(ordered(a.index(), b.index()), (0, 3))
}

/// Branches that punish themselves when doubled: 子午酉亥.
pub const fn self_punishing(branch: EarthlyBranch) -> bool {
    matches!(
        branch,
        EarthlyBranch::Zi | EarthlyBranch::Wu | EarthlyBranch::You | EarthlyBranch::Hai
    )
}

/// Heavenly Stem Combinations (Tian Gan He): affinity pairs five apart.
pub const fn stem_combination(a: HeavenlyStem, b: HeavenlyStem) -> Option<Element> {
    match ordered(a.index(), b.index()) {
        (0, 5) => Some(Element::Earth), // 甲己合土
        (1, 6) => Some(Element::Metal), // 乙庚合金
        (2, 7) => Some(Element::Water), // 丙辛合水
        (3, 8) => Some(Element::Wood),  // 丁壬合木
        (4, 9) => Some(Element::Fire),  // 戊癸合火
        _ => None,
    }
}

/// One Three-Harmony trine: three branches merging into an element frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonyTrine {
    pub branches: [EarthlyBranch; 3],
    pub element: Element,
}

/// The four harmony trines: 申子辰水, 亥卯未木, 寅午戌火, 巳酉丑金.
pub const HARMONY_TRINES: [HarmonyTrine; 4] = [
    HarmonyTrine {
        branches: [EarthlyBranch::Shen, EarthlyBranch::Zi, EarthlyBranch::Chen],
        element: Element::Water,
    },
    HarmonyTrine {
        branches: [EarthlyBranch::Hai, EarthlyBranch::Mao, EarthlyBranch::Wei],
        element: Element::Wood,
    },
    HarmonyTrine {
        branches: [EarthlyBranch::Yin, EarthlyBranch::Wu, EarthlyBranch::Xu],
        element: Element::Fire,
    },
    HarmonyTrine {
        branches: [EarthlyBranch::Si, EarthlyBranch::You, EarthlyBranch::Chou],
        element: Element::Metal,
    },
];

/// Three-Punishment group classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentKind {
    /// 寅巳申: ungrateful punishment (Wu En).
    Ungrateful,
    /// 丑未戌: bullying punishment (Shi Shi).
    Bullying,
    /// 子卯: rude punishment (Wu Li).
    Rude,
}

/// One punishment trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunishmentGroup {
    pub branches: [EarthlyBranch; 3],
    pub kind: PunishmentKind,
}

/// The two punishment trios; two of three present already counts.
pub const PUNISHMENT_GROUPS: [PunishmentGroup; 2] = [
    PunishmentGroup {
        branches: [EarthlyBranch::Yin, EarthlyBranch::Si, EarthlyBranch::Shen],
        kind: PunishmentKind::Ungrateful,
    },
    PunishmentGroup {
        branches: [EarthlyBranch::Chou, EarthlyBranch::Wei, EarthlyBranch::Xu],
        kind: PunishmentKind::Bullying,
    },
];

/// Element frame of the trine both branches belong to, if any. Used by the
/// compatibility scorer, which treats any two trine members as bonded.
pub const fn three_harmony_pair(a: EarthlyBranch, b: EarthlyBranch) -> Option<Element> {
    let mut i = 0;
    while i < HARMONY_TRINES.len() {
        let trine = &HARMONY_TRINES[i];
        let mut has_a = false;
        let mut has_b = false;
        let mut j = 0;
        while j < 3 {
            if trine.branches[j] as u8 == a as u8 {
                has_a = true;
            }
            if trine.branches[j] as u8 == b as u8 {
                has_b = true;
            }
            j += 1;
        }
        if has_a && has_b {
            return Some(trine.element);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::ALL_BRANCHES;

    #[test]
    fn combinations_are_symmetric() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(six_combination(a, b), six_combination(b, a));
                assert_eq!(six_clash(a, b), six_clash(b, a));
                assert_eq!(six_harm(a, b), six_harm(b, a));
            }
        }
    }

    #[test]
    fn every_branch_combines_exactly_once() {
        for a in ALL_BRANCHES {
            let n = ALL_BRANCHES
                .iter()
                .filter(|&&b| b != a && six_combination(a, b).is_some())
                .count();
            assert_eq!(n, 1, "{}", a.name());
        }
    }

    #[test]
    fn clash_partner_is_six_steps_away() {
        for a in ALL_BRANCHES {
            let opposite = EarthlyBranch::from_index(i64::from(a.index()) + 6);
            assert!(six_clash(a, opposite), "{}", a.name());
        }
    }

    #[test]
    fn combination_clash_harm_are_disjoint() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                let n = [
                    six_combination(a, b).is_some(),
                    six_clash(a, b),
                    six_harm(a, b),
                ]
                .iter()
                .filter(|&&x| x)
                .count();
                assert!(n <= 1, "{} {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn trines_partition_the_branches() {
        let mut seen = [false; 12];
        for trine in HARMONY_TRINES {
            for b in trine.branches {
                assert!(!seen[b.index() as usize]);
                seen[b.index() as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn three_harmony_pair_within_trine() {
        assert_eq!(
            three_harmony_pair(EarthlyBranch::Shen, EarthlyBranch::Chen),
            Some(Element::Water)
        );
        assert_eq!(
            three_harmony_pair(EarthlyBranch::Shen, EarthlyBranch::Mao),
            None
        );
        // Same branch is its own trine member.
        assert_eq!(
            three_harmony_pair(EarthlyBranch::Wu, EarthlyBranch::Wu),
            Some(Element::Fire)
        );
    }

    #[test]
    fn every_stem_combines_exactly_once() {
        for a in bazi_base::ALL_STEMS {
            let n = bazi_base::ALL_STEMS
                .iter()
                .filter(|&&b| b != a && stem_combination(a, b).is_some())
                .count();
            assert_eq!(n, 1, "{}", a.name());
        }
    }
}
