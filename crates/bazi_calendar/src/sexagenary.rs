//! Sexagenary (60-cycle) pillar arithmetic.
//!
//! Year and day pillars come from elapsed whole years/days since the
//! 1900-01-01 epoch (position 0 = Jia-Zi), taken mod 60; stem = position
//! mod 10, branch = position mod 12, which realizes the true 60-step cycle
//! (lcm of 10 and 12).
//!
//! The month pillar uses a fixed offset formula rather than true solar-term
//! boundaries: branch = (month + 10) mod 12 and stem derived from the year
//! stem. Solar terms fall mid-month, so this is a documented approximation,
//! kept so existing charts keep their month pillars.

use chrono::{Datelike, NaiveDate};

use bazi_base::{EarthlyBranch, HeavenlyStem};

use crate::pillar::{FourPillars, Pillar};

/// First year of the supported range; sexagenary position 0.
pub const EPOCH_YEAR: i32 = 1900;

/// Last supported year.
pub const MAX_YEAR: i32 = 2100;

/// `num_days_from_ce()` of the epoch date 1900-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 693_596;

/// Position of a date in the 60-day cycle (0 = epoch day, Jia-Zi).
pub fn day_position(date: NaiveDate) -> i64 {
    (i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE).rem_euclid(60)
}

/// Year pillar from the Gregorian year.
pub fn year_pillar(year: i32) -> Pillar {
    let position = i64::from(year - EPOCH_YEAR).rem_euclid(60);
    Pillar::new(
        HeavenlyStem::from_index(position),
        EarthlyBranch::from_index(position),
    )
}

/// Month pillar from year and month (1-12).
///
/// Stem = (year_stem × 2 + month − 1) mod 10; branch = (month + 10) mod 12
/// (January → Hai, February → Zi, ...). The branch comes from the fixed
/// offset alone, never from solar-term boundaries.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = year_pillar(year).stem;
    let m = i64::from(month);
    let stem_index = (i64::from(year_stem.index()) * 2 + (m - 1).rem_euclid(12)).rem_euclid(10);
    Pillar::new(
        HeavenlyStem::from_index(stem_index),
        EarthlyBranch::from_index(m + 10),
    )
}

/// Day pillar from a Gregorian date. Exact elapsed-day arithmetic; an
/// off-by-one here would shift every downstream field.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let position = day_position(date);
    Pillar::new(
        HeavenlyStem::from_index(position),
        EarthlyBranch::from_index(position),
    )
}

/// Hour branch from the 24-hour clock. Each branch spans two hours; both
/// 23:00 and 00:00 fall in Zi.
pub const fn hour_branch(hour: u32) -> EarthlyBranch {
    if hour >= 23 || hour < 1 {
        EarthlyBranch::Zi
    } else {
        EarthlyBranch::from_index(((hour + 1) / 2) as i64)
    }
}

/// Hour stem for a given day stem and hour branch.
///
/// Day stems pair off (Jia/Yi, Bing/Ding, ...); each pair anchors a base
/// stem, advanced by half the branch index.
pub const fn hour_stem(day_stem: HeavenlyStem, branch: EarthlyBranch) -> HeavenlyStem {
    let base = (day_stem.index() / 2) * 2;
    HeavenlyStem::from_index((base + branch.index() / 2) as i64)
}

/// Hour pillar from the day stem and the 24-hour clock.
pub const fn hour_pillar(day_stem: HeavenlyStem, hour: u32) -> Pillar {
    let branch = hour_branch(hour);
    Pillar::new(hour_stem(day_stem, branch), branch)
}

/// All four natal pillars for a birth moment.
pub fn four_pillars(date: NaiveDate, hour: u32) -> FourPillars {
    let year = year_pillar(date.year());
    let month = month_pillar(date.year(), date.month());
    let day = day_pillar(date);
    let hour = hour_pillar(day.stem, hour);
    FourPillars {
        year,
        month,
        day,
        hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_day_is_jia_zi() {
        let p = day_pillar(date(1900, 1, 1));
        assert_eq!(p.stem, HeavenlyStem::Jia);
        assert_eq!(p.branch, EarthlyBranch::Zi);
    }

    #[test]
    fn epoch_year_is_jia_zi() {
        let p = year_pillar(1900);
        assert_eq!(p.stem, HeavenlyStem::Jia);
        assert_eq!(p.branch, EarthlyBranch::Zi);
    }

    #[test]
    fn year_cycle_closes_at_sixty() {
        for year in 1900..=2040 {
            let a = year_pillar(year);
            let b = year_pillar(year + 60);
            assert_eq!(a, b, "year {year}");
        }
    }

    #[test]
    fn year_cycle_period_is_exactly_sixty() {
        // No proper divisor of 60 may close the combined cycle.
        let base = year_pillar(1900);
        for period in [2, 3, 4, 5, 6, 10, 12, 15, 20, 30] {
            assert_ne!(year_pillar(1900 + period), base, "period {period}");
        }
    }

    #[test]
    fn day_cycle_closes_at_sixty() {
        let d0 = date(1987, 6, 3);
        let a = day_pillar(d0);
        let b = day_pillar(d0 + chrono::Days::new(60));
        assert_eq!(a, b);
    }

    #[test]
    fn day_count_is_leap_aware() {
        // 1904 is a leap year: Feb 28 → Mar 1 spans two days.
        let a = day_position(date(1904, 2, 28));
        let b = day_position(date(1904, 3, 1));
        assert_eq!((b - a).rem_euclid(60), 2);
        // 1900 is not a leap year despite being divisible by 4.
        let c = day_position(date(1900, 2, 28));
        let d = day_position(date(1900, 3, 1));
        assert_eq!((d - c).rem_euclid(60), 1);
    }

    #[test]
    fn golden_year_1990() {
        // (1990 - 1900) mod 60 = 30 → stem 0 (Jia), branch 6 (Wu).
        let p = year_pillar(1990);
        assert_eq!(p.stem, HeavenlyStem::Jia);
        assert_eq!(p.branch, EarthlyBranch::Wu);
    }

    #[test]
    fn golden_day_1990_05_15() {
        // 33006 elapsed days → position 6 → Geng-Wu.
        let p = day_pillar(date(1990, 5, 15));
        assert_eq!(p.stem, HeavenlyStem::Geng);
        assert_eq!(p.branch, EarthlyBranch::Wu);
    }

    #[test]
    fn golden_month_1990_05() {
        // Year stem Jia (0): stem = (0×2 + 4) mod 10 = 4 (Wu-earth);
        // branch = (5 + 10) mod 12 = 3 (Mao).
        let p = month_pillar(1990, 5);
        assert_eq!(p.stem, HeavenlyStem::Wu);
        assert_eq!(p.branch, EarthlyBranch::Mao);
    }

    #[test]
    fn hour_branch_buckets() {
        assert_eq!(hour_branch(23), EarthlyBranch::Zi);
        assert_eq!(hour_branch(0), EarthlyBranch::Zi);
        assert_eq!(hour_branch(1), EarthlyBranch::Chou);
        assert_eq!(hour_branch(2), EarthlyBranch::Chou);
        assert_eq!(hour_branch(12), EarthlyBranch::Wu);
        assert_eq!(hour_branch(14), EarthlyBranch::Wei);
        assert_eq!(hour_branch(22), EarthlyBranch::Hai);
    }

    #[test]
    fn golden_hour_geng_day_14h() {
        // Day stem Geng (6): base 6, branch Wei (7) → stem (6+3) mod 10 = Gui.
        let p = hour_pillar(HeavenlyStem::Geng, 14);
        assert_eq!(p.stem, HeavenlyStem::Gui);
        assert_eq!(p.branch, EarthlyBranch::Wei);
    }

    #[test]
    fn four_pillars_golden_chart() {
        let fp = four_pillars(date(1990, 5, 15), 14);
        assert_eq!(fp.year.chinese(), "甲午");
        assert_eq!(fp.month.chinese(), "戊卯");
        assert_eq!(fp.day.chinese(), "庚午");
        assert_eq!(fp.hour.chinese(), "癸未");
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let a = four_pillars(date(1990, 5, 15), 14);
        let b = four_pillars(date(1990, 5, 15), 14);
        assert_eq!(a, b);
    }
}
