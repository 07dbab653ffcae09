//! Symbolic stars (Shen Sha): Heavenly Nobleman and Peach Blossom.
//!
//! Two lookups over the natal pillars:
//! - Tianyi Guiren: the day stem names two nobleman branches; a hit in the
//!   day or hour branch marks the star.
//! - Taohua: each branch trine maps to one peach-blossom branch; the year
//!   or day branch triggers it wherever that branch appears in the chart.

use serde::{Deserialize, Serialize};

use bazi_base::{EarthlyBranch, HeavenlyStem};
use bazi_calendar::{ALL_POSITIONS, FourPillars, PillarPosition};

/// Nobleman branches for a day stem.
///
/// Mnemonic: 甲戊庚牛羊, 乙己鼠猴鄉, 丙丁豬雞位, 壬癸兔蛇藏, 六辛逢虎馬.
pub const fn nobleman_branches(day_stem: HeavenlyStem) -> [EarthlyBranch; 2] {
    use EarthlyBranch as B;
    use HeavenlyStem as S;
    match day_stem {
        S::Jia | S::Wu | S::Geng => [B::Chou, B::Wei],
        S::Yi | S::Ji => [B::Zi, B::Shen],
        S::Bing | S::Ding => [B::Hai, B::You],
        S::Ren | S::Gui => [B::Mao, B::Si],
        S::Xin => [B::Yin, B::Wu],
    }
}

/// Peach-blossom branch for a branch's trine.
///
/// 寅午戌 → 卯, 巳酉丑 → 午, 亥卯未 → 子, 申子辰 → 酉.
pub const fn peach_blossom_branch(branch: EarthlyBranch) -> EarthlyBranch {
    use EarthlyBranch as B;
    match branch {
        B::Yin | B::Wu | B::Xu => B::Mao,
        B::Si | B::You | B::Chou => B::Wu,
        B::Hai | B::Mao | B::Wei => B::Zi,
        B::Shen | B::Zi | B::Chen => B::You,
    }
}

/// A symbolic star found in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "deity", rename_all = "snake_case")]
pub enum DeityHit {
    /// Tianyi Guiren present in the listed positions (day and/or hour).
    Nobleman { positions: Vec<PillarPosition> },
    /// Taohua: `trigger`'s trine points at the branch sitting in `location`.
    PeachBlossom {
        trigger: PillarPosition,
        location: PillarPosition,
    },
}

/// Scan a chart for symbolic stars. An empty result is a valid outcome.
pub fn deities(pillars: &FourPillars) -> Vec<DeityHit> {
    let mut hits = Vec::new();

    let noble = nobleman_branches(pillars.day.stem);
    let mut positions = Vec::new();
    for position in [PillarPosition::Day, PillarPosition::Hour] {
        let branch = pillars.pillar(position).branch;
        if branch == noble[0] || branch == noble[1] {
            positions.push(position);
        }
    }
    if !positions.is_empty() {
        hits.push(DeityHit::Nobleman { positions });
    }

    // Peach Blossom: first trigger wins, scanning year then day.
    'taohua: for trigger in [PillarPosition::Year, PillarPosition::Day] {
        let peach = peach_blossom_branch(pillars.pillar(trigger).branch);
        for location in ALL_POSITIONS {
            if pillars.pillar(location).branch == peach {
                hits.push(DeityHit::PeachBlossom { trigger, location });
                break 'taohua;
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_calendar::Pillar;

    fn golden_pillars() -> FourPillars {
        FourPillars {
            year: Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Wu),
            month: Pillar::new(HeavenlyStem::Wu, EarthlyBranch::Mao),
            day: Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu),
            hour: Pillar::new(HeavenlyStem::Gui, EarthlyBranch::Wei),
        }
    }

    #[test]
    fn golden_chart_nobleman_in_hour() {
        // Day stem Geng → nobleman in Chou/Wei; hour branch is Wei.
        let hits = deities(&golden_pillars());
        assert!(hits.contains(&DeityHit::Nobleman {
            positions: vec![PillarPosition::Hour],
        }));
    }

    #[test]
    fn golden_chart_peach_blossom() {
        // Year branch Wu → trine peach branch Mao, found in the month pillar.
        let hits = deities(&golden_pillars());
        assert!(hits.contains(&DeityHit::PeachBlossom {
            trigger: PillarPosition::Year,
            location: PillarPosition::Month,
        }));
    }

    #[test]
    fn peach_blossom_reported_once() {
        // Year and day branch share a trine here; only the year trigger fires.
        let hits = deities(&golden_pillars());
        let n = hits
            .iter()
            .filter(|h| matches!(h, DeityHit::PeachBlossom { .. }))
            .count();
        assert_eq!(n, 1);
    }

    #[test]
    fn chart_without_stars_is_empty() {
        // Day stem Jia → nobleman Chou/Wei, absent; no peach branch present.
        let pillars = FourPillars {
            year: Pillar::new(HeavenlyStem::Bing, EarthlyBranch::Yin),
            month: Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Yin),
            day: Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Chen),
            hour: Pillar::new(HeavenlyStem::Bing, EarthlyBranch::Yin),
        };
        // Yin trine → Mao (absent); Chen trine → You (absent).
        assert!(deities(&pillars).is_empty());
    }

    #[test]
    fn every_branch_has_a_peach_branch() {
        for b in bazi_base::ALL_BRANCHES {
            // Total map; just exercise it.
            let _ = peach_blossom_branch(b);
        }
    }
}
