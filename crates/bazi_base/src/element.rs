//! Five Elements (Wu Xing) and the generation/destruction cycles.
//!
//! The two cycles are fixed 5-cycles:
//! - generation: Wood → Fire → Earth → Metal → Water → Wood
//! - destruction: Wood → Earth → Water → Fire → Metal → Wood
//!
//! Every pair of distinct elements stands in exactly one directed relation,
//! so `relationship(a, b)` and `relationship(b, a)` together classify any
//! pair completely.

use serde::{Deserialize, Serialize};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation-cycle order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index into ALL_ELEMENTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (its output).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Element::Fire,
            Self::Fire => Element::Earth,
            Self::Earth => Element::Metal,
            Self::Metal => Element::Water,
            Self::Water => Element::Wood,
        }
    }

    /// The element this one destroys (its wealth, in Ten-Gods terms).
    pub const fn destroys(self) -> Element {
        match self {
            Self::Wood => Element::Earth,
            Self::Earth => Element::Water,
            Self::Water => Element::Fire,
            Self::Fire => Element::Metal,
            Self::Metal => Element::Wood,
        }
    }

    /// The element that generates this one (its resource).
    pub const fn resource(self) -> Element {
        match self {
            Self::Wood => Element::Water,
            Self::Fire => Element::Wood,
            Self::Earth => Element::Fire,
            Self::Metal => Element::Earth,
            Self::Water => Element::Metal,
        }
    }

    /// The element that destroys this one (its controller).
    pub const fn controller(self) -> Element {
        match self {
            Self::Wood => Element::Metal,
            Self::Fire => Element::Water,
            Self::Earth => Element::Wood,
            Self::Metal => Element::Fire,
            Self::Water => Element::Earth,
        }
    }
}

/// Yin/Yang polarity, shared by stems and branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// Directed relation from one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Same,
    Generates,
    Destroys,
    None,
}

/// Directed relationship of `a` toward `b`.
///
/// Directional: `relationship(a, b)` may be `None` while `relationship(b, a)`
/// is `Generates` or `Destroys`. Callers that need the full picture must
/// check both directions.
pub const fn relationship(a: Element, b: Element) -> ElementRelation {
    if a as u8 == b as u8 {
        return ElementRelation::Same;
    }
    if a.generates() as u8 == b as u8 {
        return ElementRelation::Generates;
    }
    if a.destroys() as u8 == b as u8 {
        return ElementRelation::Destroys;
    }
    ElementRelation::None
}

/// Per-element occurrence counts across the eight chart positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts([u8; 5]);

impl ElementCounts {
    /// Empty tally.
    pub const fn new() -> Self {
        Self([0; 5])
    }

    /// Increment the count for one element.
    pub fn add(&mut self, element: Element) {
        self.0[element.index() as usize] += 1;
    }

    /// Count for one element.
    pub const fn count(&self, element: Element) -> u8 {
        self.0[element.index() as usize]
    }

    /// Total across all elements.
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Iterate (element, count) pairs in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }
}

/// Overall balance classification of a tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceClass {
    Weak,
    Neutral,
    Strong,
}

/// Element balance analysis: which elements fall outside the 0.7×–1.3×
/// band around the per-element average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub total: u8,
    pub class: BalanceClass,
    pub deficient: Vec<Element>,
    pub abundant: Vec<Element>,
}

/// Classify a tally: ≥2 deficient elements ⇒ weak, ≥2 abundant ⇒ strong,
/// otherwise neutral. A chart tally always has 8 entries, but the function
/// works for any non-empty total.
pub fn balance(counts: &ElementCounts) -> ElementBalance {
    let total = counts.total();
    let avg = f64::from(total) / 5.0;

    let deficient: Vec<Element> = counts
        .iter()
        .filter(|&(_, n)| f64::from(n) < avg * 0.7)
        .map(|(e, _)| e)
        .collect();
    let abundant: Vec<Element> = counts
        .iter()
        .filter(|&(_, n)| f64::from(n) > avg * 1.3)
        .map(|(e, _)| e)
        .collect();

    let class = if deficient.len() >= 2 {
        BalanceClass::Weak
    } else if abundant.len() >= 2 {
        BalanceClass::Strong
    } else {
        BalanceClass::Neutral
    };

    ElementBalance {
        total,
        class,
        deficient,
        abundant,
    }
}
