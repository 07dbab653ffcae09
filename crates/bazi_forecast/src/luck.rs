//! Decade luck periods (Da Yun).
//!
//! Eight 10-year periods from base age 8. The progression direction comes
//! from gender and the Year-stem polarity; each period's pillar advances
//! the natal Year pillar by (i+1)×direction steps in stem space and branch
//! space independently. The two can desync from the paired 60-cycle, which
//! is intentional and must be preserved.

use serde::{Deserialize, Serialize};

use bazi_base::{EarthlyBranch, Element, ElementRelation, HeavenlyStem, Polarity, relationship};
use bazi_calendar::{Gender, Pillar};
use bazi_text::{Lang, LifeDomain, Tone, decade_summary, decade_theme, domain_guidance};

/// Progression direction: forward for Yang male or Yin female.
pub const fn luck_direction(gender: Gender, year_stem: HeavenlyStem) -> i64 {
    let yang = matches!(year_stem.polarity(), Polarity::Yang);
    let male = matches!(gender, Gender::Male);
    if (male && yang) || (!male && !yang) { 1 } else { -1 }
}

/// Quality band of a period, from the signed −2..+2 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodQuality {
    VeryAuspicious,
    Auspicious,
    Neutral,
    Challenging,
    VeryChallenging,
}

impl PeriodQuality {
    const fn from_score(score: i8) -> PeriodQuality {
        match score {
            s if s >= 2 => Self::VeryAuspicious,
            1 => Self::Auspicious,
            0 => Self::Neutral,
            -1 => Self::Challenging,
            _ => Self::VeryChallenging,
        }
    }

    /// Fold the five bands into a guidance tone.
    pub const fn tone(self) -> Tone {
        match self {
            Self::VeryAuspicious | Self::Auspicious => Tone::Supportive,
            Self::Neutral => Tone::Balanced,
            Self::Challenging | Self::VeryChallenging => Tone::Testing,
        }
    }
}

/// Emphasis per life domain, each clamped to 0..=3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEmphasis {
    pub career: u8,
    pub wealth: u8,
    pub relationships: u8,
    pub health: u8,
    pub learning: u8,
}

impl DomainEmphasis {
    fn clamp(self) -> Self {
        Self {
            career: self.career.min(3),
            wealth: self.wealth.min(3),
            relationships: self.relationships.min(3),
            health: self.health.min(3),
            learning: self.learning.min(3),
        }
    }
}

/// One 10-year luck period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgePeriod {
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
    pub pillar: Pillar,
    /// The period's main element (its stem element).
    pub element: Element,
    /// Relation of the period element toward the Day Master.
    pub relation: ElementRelation,
    /// Signed score −2..+2.
    pub score: i8,
    pub quality: PeriodQuality,
    pub favorable: bool,
    pub domains: DomainEmphasis,
}

/// First period starts at this age.
const BASE_AGE: u32 = 8;

/// Number of periods covered (roughly ages 8–87).
const PERIOD_COUNT: u32 = 8;

fn period_score(relation: ElementRelation, reverse: ElementRelation) -> i8 {
    match relation {
        ElementRelation::Same | ElementRelation::Generates => 2,
        _ if reverse == ElementRelation::Generates => 1,
        ElementRelation::Destroys => -2,
        _ if reverse == ElementRelation::Destroys => -1,
        _ => 0,
    }
}

fn derive_domains(element: Element, relation: ElementRelation) -> DomainEmphasis {
    let mut d = DomainEmphasis::default();
    match element {
        Element::Wood => {
            d.learning += 2;
            d.career += 1;
        }
        Element::Fire => {
            d.career += 2;
            d.relationships += 1;
        }
        Element::Earth => {
            d.wealth += 1;
            d.health += 2;
        }
        Element::Metal => {
            d.wealth += 2;
            d.career += 1;
        }
        Element::Water => {
            d.learning += 1;
            d.relationships += 2;
        }
    }
    match relation {
        ElementRelation::Generates => {
            d.career += 1;
            d.wealth += 1;
            d.relationships += 1;
            d.health += 1;
            d.learning += 1;
        }
        ElementRelation::Destroys => {
            d.career += 1;
            d.health += 1;
        }
        ElementRelation::Same => {
            d.learning += 1;
            d.relationships += 1;
        }
        ElementRelation::None => {}
    }
    d.clamp()
}

/// The eight decade periods for a chart.
pub fn age_periods(
    birth_year: i32,
    gender: Gender,
    year_pillar: Pillar,
    day_master: Element,
) -> Vec<AgePeriod> {
    let direction = luck_direction(gender, year_pillar.stem);
    let stem_base = i64::from(year_pillar.stem.index());
    let branch_base = i64::from(year_pillar.branch.index());

    (0..PERIOD_COUNT)
        .map(|i| {
            let start_age = BASE_AGE + i * 10;
            let end_age = start_age + 9;
            let offset = i64::from(i + 1) * direction;
            let pillar = Pillar::new(
                HeavenlyStem::from_index(stem_base + offset),
                EarthlyBranch::from_index(branch_base + offset),
            );
            let element = pillar.element();
            let relation = relationship(element, day_master);
            let reverse = relationship(day_master, element);
            let score = period_score(relation, reverse);
            let quality = PeriodQuality::from_score(score);
            AgePeriod {
                start_age,
                end_age,
                start_year: birth_year + start_age as i32,
                end_year: birth_year + end_age as i32,
                pillar,
                element,
                relation,
                score,
                quality,
                favorable: score >= 1,
                domains: derive_domains(element, relation),
            }
        })
        .collect()
}

/// Localized guidance for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodGuidance {
    pub summary: String,
    pub themes: Vec<String>,
    pub focus_areas: Vec<String>,
    pub cautions: Vec<String>,
    pub recommended_actions: Vec<String>,
}

/// Assemble guidance text for a period from the resource tables.
pub fn period_guidance(period: &AgePeriod, lang: Lang) -> PeriodGuidance {
    let tone = period.quality.tone();
    let testing = tone == Tone::Testing;

    let mut focus_areas = Vec::new();
    let mut cautions = Vec::new();
    let mut actions = Vec::new();

    let emphasized = [
        (LifeDomain::Career, period.domains.career),
        (LifeDomain::Wealth, period.domains.wealth),
        (LifeDomain::Relationships, period.domains.relationships),
        (LifeDomain::Health, period.domains.health),
        (LifeDomain::Learning, period.domains.learning),
    ];
    for (domain, emphasis) in emphasized {
        if emphasis < 2 {
            continue;
        }
        let g = domain_guidance(domain);
        focus_areas.push(g.focus.get(lang).to_string());
        match g.caution {
            Some(caution) if testing => cautions.push(caution.get(lang).to_string()),
            _ => actions.push(g.action.get(lang).to_string()),
        }
    }

    PeriodGuidance {
        summary: decade_summary(period.start_age, period.end_age, lang),
        themes: vec![decade_theme(tone).get(lang).to_string()],
        focus_areas,
        cautions,
        recommended_actions: actions,
    }
}
