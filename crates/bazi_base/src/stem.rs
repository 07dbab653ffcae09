//! The 10 Heavenly Stems (Tian Gan).
//!
//! Stems alternate Yang/Yin within each element pair and cycle with period
//! 10. Index 0 (Jia) anchors the sexagenary epoch.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 Heavenly Stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a (possibly negative) cycle position, wrapping mod 10.
    pub const fn from_index(index: i64) -> HeavenlyStem {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin with tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jiǎ",
            Self::Yi => "Yǐ",
            Self::Bing => "Bǐng",
            Self::Ding => "Dīng",
            Self::Wu => "Wù",
            Self::Ji => "Jǐ",
            Self::Geng => "Gēng",
            Self::Xin => "Xīn",
            Self::Ren => "Rén",
            Self::Gui => "Guǐ",
        }
    }

    /// Element of the stem. Consecutive pairs share an element.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Polarity: even indices Yang, odd indices Yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Jia | Self::Bing | Self::Wu | Self::Geng | Self::Ren => Polarity::Yang,
            Self::Yi | Self::Ding | Self::Ji | Self::Xin | Self::Gui => Polarity::Yin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(HeavenlyStem::from_index(0), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::from_index(10), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::from_index(13), HeavenlyStem::Ding);
        assert_eq!(HeavenlyStem::from_index(-1), HeavenlyStem::Gui);
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expect = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expect, "{}", s.name());
        }
    }

    #[test]
    fn two_stems_per_element() {
        for e in crate::element::ALL_ELEMENTS {
            let n = ALL_STEMS.iter().filter(|s| s.element() == e).count();
            assert_eq!(n, 2, "{}", e.name());
        }
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert!(!s.chinese().is_empty());
            assert!(!s.pinyin().is_empty());
        }
    }
}
