//! Localized resource tables for chart presentation.
//!
//! Every advice/explanation string the engine can emit lives here, keyed by
//! (element | relationship-type | band, language). Scoring crates stay free
//! of presentation text; they pass a [`Lang`] only when assembling reports.

pub mod advice;
pub mod explain;
pub mod guidance;
pub mod labels;

use serde::{Deserialize, Serialize};

/// Supported output languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ko")]
    Ko,
}

impl Lang {
    /// BCP-47-ish tag used by callers.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhTw => "zh-TW",
            Self::ZhCn => "zh-CN",
            Self::Ko => "ko",
        }
    }

    /// Parse a language tag, falling back to English for unknown tags.
    pub fn from_tag(tag: &str) -> Lang {
        match tag {
            "zh-TW" => Self::ZhTw,
            "zh-CN" => Self::ZhCn,
            "ko" => Self::Ko,
            _ => Self::En,
        }
    }
}

/// One string in all four languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub zh_tw: &'static str,
    pub zh_cn: &'static str,
    pub ko: &'static str,
}

impl Localized {
    /// Resolve for a language.
    pub const fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::ZhTw => self.zh_tw,
            Lang::ZhCn => self.zh_cn,
            Lang::Ko => self.ko,
        }
    }
}

pub use advice::{
    ElementAdvice, element_advice, lucky_color, lucky_direction, lucky_food, lucky_number,
    lucky_object,
};
pub use explain::{
    annual_description, balance_recommendation, interaction_description, seasonal_explanation,
    use_god_explanation,
};
pub use guidance::{LifeDomain, Tone, decade_summary, decade_theme, domain_guidance, donts, dos};
pub use labels::{
    element_name, pillar_life_area, pillar_name, punishment_label, shichen_name,
    shichen_time_range, weekday_name,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for lang in [Lang::En, Lang::ZhTw, Lang::ZhCn, Lang::Ko] {
            assert_eq!(Lang::from_tag(lang.tag()), lang);
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_english() {
        assert_eq!(Lang::from_tag("fr"), Lang::En);
    }
}
