//! Luck-period and forecast engine.
//!
//! Three consumers of an annotated chart:
//! - decade luck periods progressing from the natal Year pillar
//! - annual luck for a target year
//! - daily forecast for a target date, with domain scores, lucky items,
//!   energy rhythm, and a weekly trend

pub mod annual;
pub mod daily;
pub mod luck;

pub use annual::{AnnualInteraction, AnnualInteractionKind, AnnualLuck, annual_luck};
pub use daily::{
    DailyForecast, DomainScores, EnergyLevel, EnergySlot, FortuneMood, LuckyHour, LuckyItems,
    WeeklyDay, daily_forecast, domain_scores, dos_and_donts, energy_rhythm, lucky_hour,
    overall_score, weekly_trend,
};
pub use luck::{
    AgePeriod, DomainEmphasis, PeriodGuidance, PeriodQuality, age_periods, luck_direction,
    period_guidance,
};
