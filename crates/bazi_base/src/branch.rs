//! The 12 Earthly Branches (Di Zhi) and their zodiac animals.
//!
//! Branches cycle with period 12. Index 0 (Zi) anchors the sexagenary epoch
//! and the 23:00–01:00 double-hour.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 12 Earthly Branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Zodiac animal attached to each branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl EarthlyBranch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a (possibly negative) cycle position, wrapping mod 12.
    pub const fn from_index(index: i64) -> EarthlyBranch {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin with tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zǐ",
            Self::Chou => "Chǒu",
            Self::Yin => "Yín",
            Self::Mao => "Mǎo",
            Self::Chen => "Chén",
            Self::Si => "Sì",
            Self::Wu => "Wǔ",
            Self::Wei => "Wèi",
            Self::Shen => "Shēn",
            Self::You => "Yǒu",
            Self::Xu => "Xū",
            Self::Hai => "Hài",
        }
    }

    /// Zodiac animal.
    pub const fn zodiac(self) -> Zodiac {
        match self {
            Self::Zi => Zodiac::Rat,
            Self::Chou => Zodiac::Ox,
            Self::Yin => Zodiac::Tiger,
            Self::Mao => Zodiac::Rabbit,
            Self::Chen => Zodiac::Dragon,
            Self::Si => Zodiac::Snake,
            Self::Wu => Zodiac::Horse,
            Self::Wei => Zodiac::Goat,
            Self::Shen => Zodiac::Monkey,
            Self::You => Zodiac::Rooster,
            Self::Xu => Zodiac::Dog,
            Self::Hai => Zodiac::Pig,
        }
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Polarity: even indices Yang, odd indices Yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Zi | Self::Yin | Self::Chen | Self::Wu | Self::Shen | Self::Xu => Polarity::Yang,
            Self::Chou | Self::Mao | Self::Si | Self::Wei | Self::You | Self::Hai => Polarity::Yin,
        }
    }
}
