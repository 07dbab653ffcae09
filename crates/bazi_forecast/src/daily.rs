//! Daily forecast: scores a target date's pillar against the natal chart.
//!
//! All heuristics are additive adjustments on a base of 50, clamped to
//! 0..=100 at the end: Use-God/Avoid-God alignment, the daily element's
//! relation to the Day Master in both directions, and clash/combination
//! hits of the daily branch against the natal branches (stacking).

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use bazi_base::{ALL_BRANCHES, EarthlyBranch, Element, ElementRelation, HeavenlyStem, relationship};
use bazi_calendar::{Pillar, day_pillar, hour_stem};
use bazi_chart::{Chart, UseGodResult, peach_blossom_branch};
use bazi_interactions::{six_clash, six_combination};
use bazi_text::{
    Lang, Localized, dos, donts, lucky_color, lucky_direction, lucky_food, lucky_number,
    lucky_object, shichen_name, shichen_time_range, weekday_name,
};

/// Mood band over the overall score: 80/60/40/20/0 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneMood {
    Breakthrough,
    SteadyProgress,
    GentleFlow,
    RestRecharge,
    LayLow,
}

impl FortuneMood {
    /// Band for a clamped overall score.
    pub const fn from_score(score: u8) -> FortuneMood {
        match score {
            s if s >= 80 => Self::Breakthrough,
            s if s >= 60 => Self::SteadyProgress,
            s if s >= 40 => Self::GentleFlow,
            s if s >= 20 => Self::RestRecharge,
            _ => Self::LayLow,
        }
    }

    /// Display label.
    pub const fn label(self) -> Localized {
        match self {
            Self::Breakthrough => Localized {
                en: "Breakthrough Day",
                zh_tw: "突破之日",
                zh_cn: "突破之日",
                ko: "돌파의 날",
            },
            Self::SteadyProgress => Localized {
                en: "Steady Progress",
                zh_tw: "穩步前進",
                zh_cn: "稳步前进",
                ko: "꾸준한 진전",
            },
            Self::GentleFlow => Localized {
                en: "Gentle Flow",
                zh_tw: "順其自然",
                zh_cn: "顺其自然",
                ko: "자연스러운 흐름",
            },
            Self::RestRecharge => Localized {
                en: "Rest & Recharge",
                zh_tw: "養精蓄銳",
                zh_cn: "养精蓄锐",
                ko: "휴식과 재충전",
            },
            Self::LayLow => Localized {
                en: "Lay Low",
                zh_tw: "韜光養晦",
                zh_cn: "韬光养晦",
                ko: "낮은 자세로",
            },
        }
    }
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Overall day score, 0..=100.
pub fn overall_score(
    day_master: Element,
    use_god: &UseGodResult,
    daily_element: Element,
    daily_branch: EarthlyBranch,
    natal_branches: &[EarthlyBranch; 4],
) -> u8 {
    let mut score = 50.0;

    if daily_element == use_god.use_god {
        score += 25.0;
    } else if daily_element == use_god.use_god_secondary {
        score += 15.0;
    } else if daily_element == use_god.avoid_god {
        score -= 20.0;
    } else if daily_element == use_god.avoid_god_secondary {
        score -= 12.0;
    }

    match relationship(daily_element, day_master) {
        ElementRelation::Generates => score += 10.0,
        ElementRelation::Same => score += 5.0,
        ElementRelation::Destroys => score -= 10.0,
        ElementRelation::None => {}
    }
    match relationship(day_master, daily_element) {
        ElementRelation::Generates => score -= 3.0,
        ElementRelation::Destroys => score -= 5.0,
        _ => {}
    }

    for &natal in natal_branches {
        if six_clash(daily_branch, natal) {
            score -= 8.0;
        }
        if six_combination(daily_branch, natal).is_some() {
            score += 8.0;
        }
    }

    clamp_score(score)
}

/// Per-domain scores, each 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScores {
    pub love: u8,
    pub wealth: u8,
    pub career: u8,
    pub study: u8,
    pub social: u8,
}

/// Domain heuristics against Resource/Output/Controller/Controlled elements
/// plus the Peach-Blossom branch of the natal Day branch.
pub fn domain_scores(
    day_master: Element,
    use_god: &UseGodResult,
    daily_element: Element,
    daily_branch: EarthlyBranch,
    natal_day_branch: EarthlyBranch,
    natal_branches: &[EarthlyBranch; 4],
) -> DomainScores {
    let wealth_element = day_master.destroys();
    let career_element = day_master.controller();
    let resource_element = day_master.resource();
    let output_element = day_master.generates();
    let peach = peach_blossom_branch(natal_day_branch);

    let mut combos = 0i32;
    let mut clashes = 0i32;
    for &natal in natal_branches {
        if six_combination(daily_branch, natal).is_some() {
            combos += 1;
        }
        if six_clash(daily_branch, natal) {
            clashes += 1;
        }
    }
    let combos = f64::from(combos);
    let clashes = f64::from(clashes);

    let mut love = 50.0;
    if daily_branch == peach {
        love += 25.0;
    }
    if daily_element == resource_element {
        love += 10.0;
    }
    if daily_element == day_master {
        love += 5.0;
    }
    if daily_element == use_god.avoid_god {
        love -= 12.0;
    }
    love += combos * 6.0 - clashes * 5.0;

    let mut wealth = 50.0;
    if daily_element == wealth_element {
        wealth += 22.0;
    }
    if daily_element == use_god.use_god && wealth_element == use_god.use_god {
        wealth += 8.0;
    }
    if daily_element == use_god.avoid_god {
        wealth -= 15.0;
    }
    if relationship(day_master, daily_element) == ElementRelation::Destroys {
        wealth += 5.0;
    }
    wealth += combos * 5.0 - clashes * 6.0;

    let mut career = 50.0;
    if daily_element == career_element {
        career += 20.0;
    }
    if daily_element == output_element {
        career += 10.0;
    }
    if daily_element == use_god.avoid_god {
        career -= 15.0;
    }
    if daily_element == use_god.use_god {
        career += 12.0;
    }
    career += combos * 5.0 - clashes * 6.0;

    let mut study = 50.0;
    if daily_element == resource_element {
        study += 22.0;
    }
    if daily_element == day_master {
        study += 5.0;
    }
    if daily_element == use_god.avoid_god {
        study -= 12.0;
    }
    if daily_element == use_god.use_god {
        study += 10.0;
    }
    study += combos * 4.0 - clashes * 5.0;

    let mut social = 50.0;
    if daily_element == day_master {
        social += 15.0;
    }
    if daily_element == output_element {
        social += 12.0;
    }
    if daily_branch == peach {
        social += 10.0;
    }
    if daily_element == use_god.avoid_god {
        social -= 12.0;
    }
    social += combos * 7.0 - clashes * 6.0;

    DomainScores {
        love: clamp_score(love),
        wealth: clamp_score(wealth),
        career: clamp_score(career),
        study: clamp_score(study),
        social: clamp_score(social),
    }
}

/// The best double-hour of the day for the Use-God element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyHour {
    pub branch: EarthlyBranch,
    pub name: String,
    pub time_range: &'static str,
    pub score: i32,
}

/// Pick the double-hour whose stem element best matches the Use God.
/// Earlier hours win ties.
pub fn lucky_hour(
    daily_stem: HeavenlyStem,
    day_master: Element,
    use_god_element: Element,
    lang: Lang,
) -> LuckyHour {
    let mut best_branch = EarthlyBranch::Zi;
    let mut best_score = i32::MIN;
    for branch in ALL_BRANCHES {
        let element = hour_stem(daily_stem, branch).element();
        let mut score = 0;
        if element == use_god_element {
            score += 30;
        }
        if element == day_master {
            score += 10;
        }
        if relationship(element, day_master) == ElementRelation::Generates {
            score += 15;
        }
        if score > best_score {
            best_score = score;
            best_branch = branch;
        }
    }
    LuckyHour {
        branch: best_branch,
        name: shichen_name(best_branch).get(lang).to_string(),
        time_range: shichen_time_range(best_branch),
        score: best_score,
    }
}

/// Practical lucky items for the day, resolved for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyItems {
    pub color: String,
    pub number: &'static str,
    pub direction: String,
    pub hour: LuckyHour,
    pub object: String,
    pub food: String,
}

fn lucky_items(
    daily_stem: HeavenlyStem,
    day_master: Element,
    use_god_element: Element,
    lang: Lang,
) -> LuckyItems {
    LuckyItems {
        color: lucky_color(use_god_element).get(lang).to_string(),
        number: lucky_number(use_god_element),
        direction: lucky_direction(use_god_element).get(lang).to_string(),
        hour: lucky_hour(daily_stem, day_master, use_god_element, lang),
        object: lucky_object(use_god_element).get(lang).to_string(),
        food: lucky_food(use_god_element).get(lang).to_string(),
    }
}

/// Energy level of a double-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

/// One of the 12 double-hour slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergySlot {
    pub branch: EarthlyBranch,
    pub name: String,
    pub time_range: &'static str,
    pub element: Element,
    pub score: u8,
    pub level: EnergyLevel,
}

/// Score all 12 double-hours of the day for the chart owner.
pub fn energy_rhythm(
    daily_stem: HeavenlyStem,
    day_master: Element,
    use_god_element: Element,
    lang: Lang,
) -> Vec<EnergySlot> {
    ALL_BRANCHES
        .into_iter()
        .map(|branch| {
            let element = hour_stem(daily_stem, branch).element();
            let mut score = 50.0;
            if element == use_god_element {
                score += 25.0;
            }
            if element == day_master {
                score += 10.0;
            }
            match relationship(element, day_master) {
                ElementRelation::Generates => score += 15.0,
                ElementRelation::Destroys => score -= 15.0,
                _ => {}
            }
            // The destroyer is also the controller; both deductions stack.
            if element == day_master.controller() {
                score -= 10.0;
            }
            let score = clamp_score(score);
            let level = if score >= 75 {
                EnergyLevel::High
            } else if score >= 45 {
                EnergyLevel::Medium
            } else {
                EnergyLevel::Low
            };
            EnergySlot {
                branch,
                name: shichen_name(branch).get(lang).to_string(),
                time_range: shichen_time_range(branch),
                element,
                score,
                level,
            }
        })
        .collect()
}

/// Do/don't lists for the day. The daily element drives the do-list when it
/// is favorable; otherwise the Use God does. The don't-list always follows
/// the Avoid God.
pub fn dos_and_donts(
    day_master: Element,
    use_god_element: Element,
    avoid_god_element: Element,
    daily_element: Element,
    lang: Lang,
) -> (Vec<String>, Vec<String>) {
    let daily_favorable = daily_element == use_god_element
        || relationship(daily_element, day_master) == ElementRelation::Generates
        || daily_element == day_master;
    let do_element = if daily_favorable {
        daily_element
    } else {
        use_god_element
    };
    let do_list = dos(do_element)
        .iter()
        .map(|l| l.get(lang).to_string())
        .collect();
    let dont_list = donts(avoid_god_element)
        .iter()
        .map(|l| l.get(lang).to_string())
        .collect();
    (do_list, dont_list)
}

/// One day of the weekly trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyDay {
    pub date: NaiveDate,
    pub day: String,
    pub score: u8,
    pub element: Element,
    pub is_today: bool,
}

/// Seven-day score trend over the Monday-anchored week containing the
/// target date.
pub fn weekly_trend(
    day_master: Element,
    use_god: &UseGodResult,
    natal_branches: &[EarthlyBranch; 4],
    target: NaiveDate,
    lang: Lang,
) -> Vec<WeeklyDay> {
    let monday = target - Days::new(u64::from(target.weekday().num_days_from_monday()));
    (0..7u64)
        .filter_map(|i| monday.checked_add_days(Days::new(i)))
        .map(|date| {
            let pillar = day_pillar(date);
            let element = pillar.element();
            let score = overall_score(day_master, use_god, element, pillar.branch, natal_branches);
            WeeklyDay {
                date,
                day: weekday_name(date.weekday()).get(lang).to_string(),
                score,
                element,
                is_today: date == target,
            }
        })
        .collect()
}

/// Complete daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub pillar: Pillar,
    pub overall: u8,
    pub mood: FortuneMood,
    pub mood_label: String,
    pub domains: DomainScores,
    pub lucky: LuckyItems,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub energy_rhythm: Vec<EnergySlot>,
    pub weekly_trend: Vec<WeeklyDay>,
}

/// Score a target date against a natal chart.
pub fn daily_forecast(chart: &Chart, target: NaiveDate, lang: Lang) -> DailyForecast {
    let day_master = chart.day_master.element();
    let use_god = &chart.use_god;
    let natal_branches = chart.pillars.branches();

    let pillar = day_pillar(target);
    let daily_element = pillar.element();

    let overall = overall_score(
        day_master,
        use_god,
        daily_element,
        pillar.branch,
        &natal_branches,
    );
    let mood = FortuneMood::from_score(overall);
    let domains = domain_scores(
        day_master,
        use_god,
        daily_element,
        pillar.branch,
        chart.pillars.day.branch,
        &natal_branches,
    );
    let (do_list, dont_list) = dos_and_donts(
        day_master,
        use_god.use_god,
        use_god.avoid_god,
        daily_element,
        lang,
    );

    debug!(%target, overall, "daily forecast scored");

    DailyForecast {
        date: target,
        pillar,
        overall,
        mood,
        mood_label: mood.label().get(lang).to_string(),
        domains,
        lucky: lucky_items(pillar.stem, day_master, use_god.use_god, lang),
        dos: do_list,
        donts: dont_list,
        energy_rhythm: energy_rhythm(pillar.stem, day_master, use_god.use_god, lang),
        weekly_trend: weekly_trend(day_master, use_god, &natal_branches, target, lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_calendar::{BirthInput, Gender};
    use bazi_chart::DayMasterStrength;

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
    fn golden_birthday_forecast() {
        // Target 1990-05-15 itself: daily pillar 庚午, Metal day.
        // Use-God secondary (+15), same-element (+5), Wu-Wei combination (+8).
        let chart = golden_chart();
        let f = daily_forecast(&chart, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), Lang::En);
        assert_eq!(f.pillar.chinese(), "庚午");
        assert_eq!(f.overall, 78);
        assert_eq!(f.mood, FortuneMood::SteadyProgress);
    }

    #[test]
    fn golden_birthday_domains() {
        let chart = golden_chart();
        let f = daily_forecast(&chart, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), Lang::En);
        assert_eq!(f.domains.love, 61);
        assert_eq!(f.domains.wealth, 55);
        assert_eq!(f.domains.career, 55);
        assert_eq!(f.domains.study, 59);
        assert_eq!(f.domains.social, 72);
    }

    #[test]
    fn golden_lucky_hour_is_zi() {
        // Daily stem Geng: no hour stem is Earth, so the same-element Metal
        // hours win and the earliest (Zi) is picked.
        let chart = golden_chart();
        let f = daily_forecast(&chart, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), Lang::En);
        assert_eq!(f.lucky.hour.branch, EarthlyBranch::Zi);
        assert_eq!(f.lucky.hour.score, 10);
        assert_eq!(f.lucky.hour.time_range, "23:00-01:00");
    }

    #[test]
    fn weekly_trend_covers_monday_week() {
        let chart = golden_chart();
        // 1990-05-15 was a Tuesday; the week runs 05-14 .. 05-20.
        let target = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let f = daily_forecast(&chart, target, Lang::En);
        assert_eq!(f.weekly_trend.len(), 7);
        assert_eq!(
            f.weekly_trend[0].date,
            NaiveDate::from_ymd_opt(1990, 5, 14).unwrap()
        );
        assert_eq!(f.weekly_trend[0].day, "Mon");
        assert_eq!(f.weekly_trend.iter().filter(|d| d.is_today).count(), 1);
        assert!(f.weekly_trend[1].is_today);
    }

    #[test]
    fn scores_stay_clamped_under_adversarial_stacking() {
        // A chart whose Avoid God, destroyer, and clashes all line up still
        // never leaves 0..=100.
        let chart = golden_chart();
        assert_eq!(chart.use_god.strength, DayMasterStrength::Weak);
        let mut date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        for _ in 0..120 {
            let f = daily_forecast(&chart, date, Lang::En);
            assert!(f.overall <= 100);
            for s in [
                f.domains.love,
                f.domains.wealth,
                f.domains.career,
                f.domains.study,
                f.domains.social,
            ] {
                assert!(s <= 100);
            }
            for slot in &f.energy_rhythm {
                assert!(slot.score <= 100);
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn dos_follow_daily_element_when_favorable() {
        // Daily Metal equals the secondary Use God and the Day Master, so
        // the do-list comes from Metal, not Earth.
        let chart = golden_chart();
        let (do_list, dont_list) = dos_and_donts(
            Element::Metal,
            chart.use_god.use_god,
            chart.use_god.avoid_god,
            Element::Metal,
            Lang::En,
        );
        assert_eq!(do_list.len(), 4);
        assert_eq!(dont_list.len(), 3);
        assert!(do_list[0].contains("Negotiate"));
        // Avoid God is Fire.
        assert!(dont_list[0].contains("heated"));
    }

    #[test]
    fn energy_rhythm_has_twelve_slots() {
        let chart = golden_chart();
        let f = daily_forecast(&chart, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(), Lang::En);
        assert_eq!(f.energy_rhythm.len(), 12);
        for slot in &f.energy_rhythm {
            let expect = if slot.score >= 75 {
                EnergyLevel::High
            } else if slot.score >= 45 {
                EnergyLevel::Medium
            } else {
                EnergyLevel::Low
            };
            assert_eq!(slot.level, expect);
        }
    }
}
