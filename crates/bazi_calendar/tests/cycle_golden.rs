//! Golden-value tests for the sexagenary cycle.
//!
//! Pins the 1900 epoch, the 60-step period of the combined cycle, and the
//! leap-aware day arithmetic across century boundaries.

use chrono::NaiveDate;

use bazi_base::{EarthlyBranch, HeavenlyStem};
use bazi_calendar::{day_pillar, day_position, four_pillars, year_pillar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn year_stem_and_branch_close_at_sixty_over_full_range() {
    for year in 1900..=2040 {
        assert_eq!(year_pillar(year), year_pillar(year + 60), "{year}");
    }
}

#[test]
fn combined_period_is_never_a_proper_divisor() {
    // stem alone closes at 10 and branch at 12, but the pair only at 60.
    for year in 1900..=1905 {
        for period in [10, 12, 20, 30] {
            assert_ne!(year_pillar(year), year_pillar(year + period));
        }
    }
}

#[test]
fn day_cycle_across_non_leap_century() {
    // 1900 was not a leap year: Feb 28 and Mar 1 are adjacent.
    let feb28 = day_position(date(1900, 2, 28));
    let mar1 = day_position(date(1900, 3, 1));
    assert_eq!((mar1 - feb28).rem_euclid(60), 1);
    // 2000 was a leap year.
    let feb28 = day_position(date(2000, 2, 28));
    let mar1 = day_position(date(2000, 3, 1));
    assert_eq!((mar1 - feb28).rem_euclid(60), 2);
}

#[test]
fn day_pillar_spot_checks() {
    // Epoch day.
    let p = day_pillar(date(1900, 1, 1));
    assert_eq!((p.stem, p.branch), (HeavenlyStem::Jia, EarthlyBranch::Zi));
    // 33006 days later: position 6.
    let p = day_pillar(date(1990, 5, 15));
    assert_eq!((p.stem, p.branch), (HeavenlyStem::Geng, EarthlyBranch::Wu));
    // One full cycle after the epoch.
    let p = day_pillar(date(1900, 3, 2));
    assert_eq!((p.stem, p.branch), (HeavenlyStem::Jia, EarthlyBranch::Zi));
}

#[test]
fn golden_chart_reproducible() {
    for _ in 0..3 {
        let fp = four_pillars(date(1990, 5, 15), 14);
        assert_eq!(fp.year.chinese(), "甲午");
        assert_eq!(fp.month.chinese(), "戊卯");
        assert_eq!(fp.day.chinese(), "庚午");
        assert_eq!(fp.hour.chinese(), "癸未");
    }
}

#[test]
fn range_boundaries_compute() {
    // Both ends of the supported range produce pillars without wrapping
    // surprises.
    let lo = four_pillars(date(1900, 1, 1), 0);
    assert_eq!(lo.year.chinese(), "甲子");
    let hi = four_pillars(date(2100, 12, 31), 23);
    // (2100 − 1900) mod 60 = 20 → stem 0 (Jia), branch 8 (Shen).
    assert_eq!(hi.year.stem, HeavenlyStem::Jia);
    assert_eq!(hi.year.branch, EarthlyBranch::Shen);
}
