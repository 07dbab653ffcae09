//! Golden-value test for the fully annotated 1990-05-15 14:00 male chart.
//!
//! Every derived field is pinned so a regression anywhere in the pipeline
//! (calendar, tally, ten gods, strength, use god, deities) surfaces here.

use chrono::NaiveDate;

use bazi_base::{BalanceClass, EarthlyBranch, Element, HeavenlyStem};
use bazi_calendar::{BirthInput, Gender, PillarPosition};
use bazi_chart::{
    Chart, DayMasterStrength, DeityHit, SeasonalStrength, TenGod,
};

fn golden_chart() -> Chart {
    Chart::from_birth(
        BirthInput::new(
            NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            14,
            Gender::Male,
        )
        .unwrap(),
    )
}

#[test]
fn pillars_and_day_master() {
    let chart = golden_chart();
    assert_eq!(chart.pillars.year.chinese(), "甲午");
    assert_eq!(chart.pillars.month.chinese(), "戊卯");
    assert_eq!(chart.pillars.day.chinese(), "庚午");
    assert_eq!(chart.pillars.hour.chinese(), "癸未");
    assert_eq!(chart.day_master, HeavenlyStem::Geng);
    assert_eq!(chart.day_master.element(), Element::Metal);
}

#[test]
fn element_tally_and_balance() {
    let chart = golden_chart();
    let expected = [
        (Element::Wood, 2),
        (Element::Fire, 2),
        (Element::Earth, 2),
        (Element::Metal, 1),
        (Element::Water, 1),
    ];
    for (element, count) in expected {
        assert_eq!(chart.counts.count(element), count, "{}", element.name());
    }
    assert_eq!(chart.balance.class, BalanceClass::Weak);
}

#[test]
fn ten_god_annotations() {
    let chart = golden_chart();
    assert_eq!(chart.ten_gods.stems[0], TenGod::IndirectWealth);
    assert_eq!(chart.ten_gods.stems[1], TenGod::IndirectResource);
    assert_eq!(chart.ten_gods.stems[2], TenGod::Friend);
    assert_eq!(chart.ten_gods.stems[3], TenGod::HurtingOfficer);
    assert_eq!(chart.ten_gods.branches[0], TenGod::SevenKillings);
    assert_eq!(chart.ten_gods.branches[1], TenGod::DirectWealth);
    assert_eq!(chart.ten_gods.branches[2], TenGod::SevenKillings);
    assert_eq!(chart.ten_gods.branches[3], TenGod::DirectResource);
    assert_eq!(chart.strongest_ten_god.god, TenGod::SevenKillings);
    assert_eq!(chart.strongest_ten_god.count, 2);
}

#[test]
fn strength_and_use_god() {
    let chart = golden_chart();
    // Metal born in a Mao (Wood) month sits in its opposing window.
    assert_eq!(chart.seasonal_strength, SeasonalStrength::Weak);
    assert_eq!(chart.use_god.score, -3.5);
    assert_eq!(chart.use_god.strength, DayMasterStrength::Weak);
    assert_eq!(chart.use_god.use_god, Element::Earth);
    assert_eq!(chart.use_god.use_god_secondary, Element::Metal);
    assert_eq!(chart.use_god.avoid_god, Element::Fire);
    assert_eq!(chart.use_god.avoid_god_secondary, Element::Water);
}

#[test]
fn hidden_stems_per_position() {
    let chart = golden_chart();
    assert_eq!(chart.hidden[0], &[HeavenlyStem::Ding, HeavenlyStem::Ji][..]);
    assert_eq!(chart.hidden[1], &[HeavenlyStem::Yi][..]);
    assert_eq!(chart.hidden[2], &[HeavenlyStem::Ding, HeavenlyStem::Ji][..]);
    assert_eq!(
        chart.hidden[3],
        &[HeavenlyStem::Ji, HeavenlyStem::Ding, HeavenlyStem::Yi][..]
    );
}

#[test]
fn deity_hits() {
    let chart = golden_chart();
    assert_eq!(
        chart.deities,
        vec![
            DeityHit::Nobleman {
                positions: vec![PillarPosition::Hour],
            },
            DeityHit::PeachBlossom {
                trigger: PillarPosition::Year,
                location: PillarPosition::Month,
            },
        ]
    );
}

#[test]
fn wood_day_master_in_metal_month_is_weak() {
    // 1990-11-15: day position 33190 mod 60 = 10 → Jia (Wood) Day Master;
    // month branch (11 + 10) mod 12 = 9 → You, squarely in the Metal window.
    let chart = Chart::from_birth(
        BirthInput::new(
            NaiveDate::from_ymd_opt(1990, 11, 15).unwrap(),
            14,
            Gender::Male,
        )
        .unwrap(),
    );
    assert_eq!(chart.pillars.month.branch, EarthlyBranch::You);
    assert_eq!(chart.day_master, HeavenlyStem::Jia);
    assert_eq!(chart.day_master.element(), Element::Wood);
    assert_eq!(chart.seasonal_strength, SeasonalStrength::Weak);
}
