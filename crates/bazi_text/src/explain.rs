//! Explanation builders: templated multi-language prose for strength,
//! use-god, balance, and interaction results.

use bazi_base::{Element, ElementBalance};
use bazi_calendar::{FourPillars, PillarPosition};
use bazi_chart::{DayMasterStrength, SeasonalStrength, UseGodResult};
use bazi_interactions::{InteractionKind, PillarInteraction};

use crate::labels::{element_name, pillar_life_area, pillar_name, punishment_label};
use crate::{Lang, Localized};

/// Seasonal strength explanation for the Day Master.
pub fn seasonal_explanation(strength: SeasonalStrength, day_master: Element, lang: Lang) -> String {
    let dm = element_name(day_master).get(lang);
    match (strength, lang) {
        (SeasonalStrength::Strong, Lang::En) => format!(
            "Your Day Master ({dm}) is in season — born in its element's peak month. \
             This suggests natural vitality and support from the environment."
        ),
        (SeasonalStrength::Strong, Lang::ZhTw) => format!(
            "您的日主（{dm}）得令，生於該五行當令之月，代表先天能量較旺，環境對您有助益。"
        ),
        (SeasonalStrength::Strong, Lang::ZhCn) => format!(
            "您的日主（{dm}）得令，生于该五行当令之月，代表先天能量较旺，环境对您有助益。"
        ),
        (SeasonalStrength::Strong, Lang::Ko) => format!(
            "일주（{dm}）가 득령입니다. 해당 오행이 당령인 달에 태어나 선천적 에너지가 왕성하고 환경의 도움을 받습니다."
        ),
        (SeasonalStrength::Weak, Lang::En) => format!(
            "Your Day Master ({dm}) is out of season — born in its opposite element's peak month. \
             This suggests the need for support from other pillars or elements."
        ),
        (SeasonalStrength::Weak, Lang::ZhTw) => format!(
            "您的日主（{dm}）失令，生於剋制該五行之月，代表先天能量較弱，需從其他柱或五行中尋求補益。"
        ),
        (SeasonalStrength::Weak, Lang::ZhCn) => format!(
            "您的日主（{dm}）失令，生于克制该五行之月，代表先天能量较弱，需从其他柱或五行中寻求补益。"
        ),
        (SeasonalStrength::Weak, Lang::Ko) => format!(
            "일주（{dm}）가 실령입니다. 해당 오행을 극하는 달에 태어나 선천적 에너지가 약하며 다른 주나 오행에서 보완이 필요합니다."
        ),
        (SeasonalStrength::Neutral, Lang::En) => format!(
            "Your Day Master ({dm}) is in a neutral season — neither strongly supported nor \
             weakened by the birth month."
        ),
        (SeasonalStrength::Neutral, Lang::ZhTw) => format!(
            "您的日主（{dm}）處於平令，出生月份對日主既無明顯助益也無明顯剋制。"
        ),
        (SeasonalStrength::Neutral, Lang::ZhCn) => format!(
            "您的日主（{dm}）处于平令，出生月份对日主既无明显助益也无明显克制。"
        ),
        (SeasonalStrength::Neutral, Lang::Ko) => format!(
            "일주（{dm}）가 평령입니다. 출생 월이 일주에 뚜렷한 도움이나 극제를 주지 않습니다."
        ),
    }
}

const STRENGTH_LABELS: [(DayMasterStrength, Localized); 3] = [
    (
        DayMasterStrength::Strong,
        Localized {
            en: "Strong",
            zh_tw: "偏旺",
            zh_cn: "偏旺",
            ko: "강",
        },
    ),
    (
        DayMasterStrength::Weak,
        Localized {
            en: "Weak",
            zh_tw: "偏弱",
            zh_cn: "偏弱",
            ko: "약",
        },
    ),
    (
        DayMasterStrength::Balanced,
        Localized {
            en: "Balanced",
            zh_tw: "中和",
            zh_cn: "中和",
            ko: "균형",
        },
    ),
];

fn strength_label(strength: DayMasterStrength, lang: Lang) -> &'static str {
    STRENGTH_LABELS
        .iter()
        .find(|(s, _)| *s == strength)
        .map(|(_, l)| l.get(lang))
        .unwrap_or("")
}

/// Full Use-God explanation: why the chart is strong/weak/balanced and
/// which elements to favor or minimize.
pub fn use_god_explanation(result: &UseGodResult, day_master: Element, lang: Lang) -> String {
    let dm = element_name(day_master).get(lang);
    let sl = strength_label(result.strength, lang);
    let ug = element_name(result.use_god).get(lang);
    let ug2 = element_name(result.use_god_secondary).get(lang);
    let ag = element_name(result.avoid_god).get(lang);
    let ag2 = element_name(result.avoid_god_secondary).get(lang);

    let reason = match (result.strength, lang) {
        (DayMasterStrength::Strong, Lang::En) => format!(
            "Your Day Master ({dm}) is {sl} — it has ample support from the chart and season. \
             To achieve balance, you need elements that drain or control its excess energy."
        ),
        (DayMasterStrength::Weak, Lang::En) => format!(
            "Your Day Master ({dm}) is {sl} — it lacks sufficient support from the chart and \
             season. To achieve balance, you need elements that nourish and strengthen it."
        ),
        (DayMasterStrength::Balanced, Lang::En) => format!(
            "Your Day Master ({dm}) is {sl} — it has a relatively even distribution of support \
             and opposition. Gentle support from resource elements is recommended."
        ),
        (DayMasterStrength::Strong, Lang::ZhTw) => {
            format!("您的日主（{dm}）{sl}——命盤中得到充足助力。需要泄耗或克制的五行來取得平衡。")
        }
        (DayMasterStrength::Weak, Lang::ZhTw) => {
            format!("您的日主（{dm}）{sl}——命盤中助力不足。需要生扶的五行來增強力量。")
        }
        (DayMasterStrength::Balanced, Lang::ZhTw) => {
            format!("您的日主（{dm}）{sl}——命盤中生克較為均衡。建議以印星（生我之五行）溫和補益。")
        }
        (DayMasterStrength::Strong, Lang::ZhCn) => {
            format!("您的日主（{dm}）{sl}——命盘中得到充足助力。需要泄耗或克制的五行来取得平衡。")
        }
        (DayMasterStrength::Weak, Lang::ZhCn) => {
            format!("您的日主（{dm}）{sl}——命盘中助力不足。需要生扶的五行来增强力量。")
        }
        (DayMasterStrength::Balanced, Lang::ZhCn) => {
            format!("您的日主（{dm}）{sl}——命盘中生克较为均衡。建议以印星（生我之五行）温和补益。")
        }
        (DayMasterStrength::Strong, Lang::Ko) => format!(
            "일주（{dm}）가 {sl}합니다 — 명반에서 충분한 지지를 받고 있습니다. 균형을 위해 설기(泄氣)하거나 극제하는 오행이 필요합니다."
        ),
        (DayMasterStrength::Weak, Lang::Ko) => format!(
            "일주（{dm}）가 {sl}합니다 — 명반에서 지지가 부족합니다. 균형을 위해 생부(生扶)하는 오행이 필요합니다."
        ),
        (DayMasterStrength::Balanced, Lang::Ko) => format!(
            "일주（{dm}）가 {sl}입니다 — 명반에서 생극이 비교적 균형을 이루고 있습니다. 인성(생아지오행)으로 부드러운 보완을 권장합니다."
        ),
    };

    match lang {
        Lang::En => format!(
            "{reason}\n\nUse God: {ug} — your most favorable element. Secondary: {ug2}.\n\
             Avoid God: {ag} — the element to minimize. Secondary: {ag2}."
        ),
        Lang::ZhTw => format!(
            "{reason}\n\n用神：{ug}——最有利的五行。輔助用神：{ug2}。\n忌神：{ag}——應盡量避開的五行。輔助忌神：{ag2}。"
        ),
        Lang::ZhCn => format!(
            "{reason}\n\n用神：{ug}——最有利的五行。辅助用神：{ug2}。\n忌神：{ag}——应尽量避开的五行。辅助忌神：{ag2}。"
        ),
        Lang::Ko => format!(
            "{reason}\n\n용신(用神): {ug} — 가장 유리한 오행. 보조 용신: {ug2}.\n기신(忌神): {ag} — 최소화해야 할 오행. 보조 기신: {ag2}."
        ),
    }
}

/// Balance recommendation from the element tally.
pub fn balance_recommendation(balance: &ElementBalance, lang: Lang) -> String {
    let join = |elements: &[Element]| -> String {
        elements
            .iter()
            .map(|e| element_name(*e).get(lang))
            .collect::<Vec<_>>()
            .join(match lang {
                Lang::En | Lang::Ko => ", ",
                Lang::ZhTw | Lang::ZhCn => "、",
            })
    };
    if !balance.deficient.is_empty() {
        let list = join(&balance.deficient);
        match lang {
            Lang::En => format!(
                "Your chart is missing or weak in: {list}. Consider incorporating these \
                 elements in your life (colors, activities, timing)."
            ),
            Lang::ZhTw => format!("您的命盤欠缺或偏弱的五行：{list}。建議在生活中補強（顏色、活動、時機）。"),
            Lang::ZhCn => format!("您的命盘欠缺或偏弱的五行：{list}。建议在生活中补强（颜色、活动、时机）。"),
            Lang::Ko => format!("명반에서 부족하거나 약한 오행: {list}. 색상, 활동, 시기를 통해 보완해 보세요."),
        }
    } else if !balance.abundant.is_empty() {
        let list = join(&balance.abundant);
        match lang {
            Lang::En => format!("Your chart has excess: {list}. Try to balance with other elements."),
            Lang::ZhTw => format!("您的命盤偏多的五行：{list}。宜以其他五行調和。"),
            Lang::ZhCn => format!("您的命盘偏多的五行：{list}。宜以其他五行调和。"),
            Lang::Ko => format!("명반에 과다한 오행: {list}. 다른 오행으로 균형을 맞추세요."),
        }
    } else {
        match lang {
            Lang::En => "Your chart has a balanced distribution of elements. Lucky you!".to_string(),
            Lang::ZhTw => "您的命盤五行分布均衡，十分難得。".to_string(),
            Lang::ZhCn => "您的命盘五行分布均衡，十分难得。".to_string(),
            Lang::Ko => "명반의 오행 분포가 균형 잡혀 있습니다. 행운입니다!".to_string(),
        }
    }
}

fn positions_list(positions: &[PillarPosition], lang: Lang) -> String {
    let sep = match lang {
        Lang::En | Lang::Ko => ", ",
        Lang::ZhTw | Lang::ZhCn => "、",
    };
    positions
        .iter()
        .map(|p| pillar_name(*p).get(lang))
        .collect::<Vec<_>>()
        .join(sep)
}

fn branches_string(pillars: &FourPillars, interaction: &PillarInteraction) -> String {
    interaction
        .positions
        .iter()
        .map(|p| {
            if interaction.kind == InteractionKind::StemCombination {
                pillars.pillar(*p).stem.chinese()
            } else {
                pillars.pillar(*p).branch.chinese()
            }
        })
        .collect()
}

/// Prose description of one natal interaction.
pub fn interaction_description(
    pillars: &FourPillars,
    interaction: &PillarInteraction,
    lang: Lang,
) -> String {
    let names = positions_list(&interaction.positions, lang);
    let chars = branches_string(pillars, interaction);
    let element = interaction
        .element
        .map(|e| element_name(e).get(lang))
        .unwrap_or("");

    match (interaction.kind, lang) {
        (InteractionKind::SixCombination, Lang::En) => format!(
            "{names} branches ({chars}) form a Six Combination, merging into {element}. \
             This indicates natural harmony and mutual support."
        ),
        (InteractionKind::SixCombination, Lang::ZhTw) => {
            format!("{names}地支{chars}六合，合化{element}，主和諧融洽。")
        }
        (InteractionKind::SixCombination, Lang::ZhCn) => {
            format!("{names}地支{chars}六合，合化{element}，主和谐融洽。")
        }
        (InteractionKind::SixCombination, Lang::Ko) => {
            format!("{names} 지지 {chars} 육합, {element}로 합화, 조화와 화합을 의미합니다.")
        }
        (InteractionKind::SixClash, Lang::En) => format!(
            "{names} branches ({chars}) form a Six Clash. Expect tension, change, and the \
             need for adaptability in this life area."
        ),
        (InteractionKind::SixClash, Lang::ZhTw) => {
            format!("{names}地支{chars}六沖，主動盪變化，需注意衝突與轉變。")
        }
        (InteractionKind::SixClash, Lang::ZhCn) => {
            format!("{names}地支{chars}六冲，主动荡变化，需注意冲突与转变。")
        }
        (InteractionKind::SixClash, Lang::Ko) => {
            format!("{names} 지지 {chars} 육충, 변동과 충돌에 주의가 필요합니다.")
        }
        (InteractionKind::SixHarm, Lang::En) => format!(
            "{names} branches ({chars}) form a Six Harm. Watch for hidden friction and \
             subtle undermining in related matters."
        ),
        (InteractionKind::SixHarm, Lang::ZhTw) => {
            format!("{names}地支{chars}六害，暗中有損，留意人際暗流。")
        }
        (InteractionKind::SixHarm, Lang::ZhCn) => {
            format!("{names}地支{chars}六害，暗中有损，留意人际暗流。")
        }
        (InteractionKind::SixHarm, Lang::Ko) => {
            format!("{names} 지지 {chars} 육해, 은밀한 손해가 있으니 대인관계에 유의하세요.")
        }
        (InteractionKind::ThreeHarmony, _) => {
            let partial = interaction.partial;
            match lang {
                Lang::En if partial => format!(
                    "{names} branches form a partial Three Harmony toward {element}. \
                     The {element} element has moderate additional influence."
                ),
                Lang::En => format!(
                    "{names} branches form a Three Harmony {element} frame. This is a powerful \
                     configuration that greatly amplifies {element} energy in your life."
                ),
                Lang::ZhTw if partial => {
                    format!("{names}地支構成三合{element}局的半合，{element}五行能量有一定增強。")
                }
                Lang::ZhTw => {
                    format!("{names}地支構成三合{element}局，力量強大，主人生中{element}五行能量顯著增強。")
                }
                Lang::ZhCn if partial => {
                    format!("{names}地支构成三合{element}局的半合，{element}五行能量有一定增强。")
                }
                Lang::ZhCn => {
                    format!("{names}地支构成三合{element}局，力量强大，主人生中{element}五行能量显著增强。")
                }
                Lang::Ko if partial => format!(
                    "{names} 지지가 삼합 {element}국의 반합을 구성, {element} 오행 에너지가 어느 정도 증강됩니다."
                ),
                Lang::Ko => format!(
                    "{names} 지지가 삼합 {element}국을 구성, 강력한 힘으로 {element} 오행 에너지가 크게 증강됩니다."
                ),
            }
        }
        (InteractionKind::Punishment, _) => {
            let label = interaction
                .punishment
                .map(|k| punishment_label(k).get(lang))
                .unwrap_or("");
            let qualifier = if interaction.partial {
                match lang {
                    Lang::En => " (partial)",
                    Lang::ZhTw | Lang::ZhCn => "（部分）",
                    Lang::Ko => " (부분)",
                }
            } else {
                ""
            };
            match lang {
                Lang::En => format!(
                    "{names} branches ({chars}) form a {label}{qualifier}. This brings karmic \
                     tests and growth through adversity."
                ),
                Lang::ZhTw => format!("{names}地支{chars}構成{label}{qualifier}，主磨練考驗，需耐心化解。"),
                Lang::ZhCn => format!("{names}地支{chars}构成{label}{qualifier}，主磨练考验，需耐心化解。"),
                Lang::Ko => format!(
                    "{names} 지지 {chars}로 {label}{qualifier} 구성, 시련과 단련을 의미하며 인내심으로 극복해야 합니다."
                ),
            }
        }
        (InteractionKind::SelfPunishment, Lang::En) => format!(
            "{names} share the same branch ({chars}), forming a Self-Punishment. This \
             suggests inner conflict and self-sabotaging tendencies."
        ),
        (InteractionKind::SelfPunishment, Lang::ZhTw) => {
            format!("{names}地支相同構成自刑，主內心矛盾與自我消耗。")
        }
        (InteractionKind::SelfPunishment, Lang::ZhCn) => {
            format!("{names}地支相同构成自刑，主内心矛盾与自我消耗。")
        }
        (InteractionKind::SelfPunishment, Lang::Ko) => {
            format!("{names} 같은 지지로 자형 구성, 내면의 갈등과 자기 소모에 주의하세요.")
        }
        (InteractionKind::StemCombination, Lang::En) => format!(
            "{names} stems ({chars}) combine into {element}. The life areas represented by \
             these two pillars support and enhance each other."
        ),
        (InteractionKind::StemCombination, Lang::ZhTw) => {
            format!("{names}天干{chars}合化{element}，主此兩柱所代表的人生領域互有助益。")
        }
        (InteractionKind::StemCombination, Lang::ZhCn) => {
            format!("{names}天干{chars}合化{element}，主此两柱所代表的人生领域互有助益。")
        }
        (InteractionKind::StemCombination, Lang::Ko) => {
            format!("{names} 천간 {chars}가 {element}로 합화, 이 두 주가 나타내는 인생 영역이 서로 도움을 줍니다.")
        }
    }
}

/// Prose description of an annual-branch hit against one natal pillar.
///
/// `clash` is true for a Six Clash, false for a Six Combination, the only
/// two categories the annual overlay reports.
pub fn annual_description(position: PillarPosition, clash: bool, lang: Lang) -> String {
    let area = pillar_life_area(position).get(lang);
    match (clash, lang) {
        (true, Lang::En) => format!(
            "Annual branch clashes with {} pillar ({area})",
            position.name()
        ),
        (true, Lang::ZhTw) => format!("流年地支與{area}柱相沖"),
        (true, Lang::ZhCn) => format!("流年地支与{area}柱相冲"),
        (true, Lang::Ko) => format!("유년 지지가 {area}주와 상충"),
        (false, Lang::En) => format!(
            "Annual branch combines with {} pillar ({area})",
            position.name()
        ),
        (false, Lang::ZhTw) => format!("流年地支與{area}柱相合"),
        (false, Lang::ZhCn) => format!("流年地支与{area}柱相合"),
        (false, Lang::Ko) => format!("유년 지지가 {area}주와 상합"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::{EarthlyBranch, HeavenlyStem};
    use bazi_calendar::Pillar;
    use bazi_interactions::analyze;

    fn golden_pillars() -> FourPillars {
        FourPillars {
            year: Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Wu),
            month: Pillar::new(HeavenlyStem::Wu, EarthlyBranch::Mao),
            day: Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu),
            hour: Pillar::new(HeavenlyStem::Gui, EarthlyBranch::Wei),
        }
    }

    #[test]
    fn every_interaction_describes_in_every_language() {
        let pillars = golden_pillars();
        for i in analyze(&pillars) {
            for lang in [Lang::En, Lang::ZhTw, Lang::ZhCn, Lang::Ko] {
                assert!(!interaction_description(&pillars, &i, lang).is_empty());
            }
        }
    }

    #[test]
    fn combination_description_names_element() {
        let pillars = golden_pillars();
        let interactions = analyze(&pillars);
        let combo = interactions
            .iter()
            .find(|i| i.kind == InteractionKind::SixCombination)
            .unwrap();
        let s = interaction_description(&pillars, combo, Lang::En);
        assert!(s.contains("Fire"), "{s}");
        let s = interaction_description(&pillars, combo, Lang::ZhTw);
        assert!(s.contains("六合"), "{s}");
    }

    #[test]
    fn seasonal_explanations_mention_element() {
        let s = seasonal_explanation(SeasonalStrength::Weak, Element::Metal, Lang::En);
        assert!(s.contains("Metal"));
        let s = seasonal_explanation(SeasonalStrength::Strong, Element::Wood, Lang::ZhCn);
        assert!(s.contains("木"));
    }

    #[test]
    fn annual_description_switches_on_kind() {
        let c = annual_description(PillarPosition::Day, true, Lang::En);
        assert!(c.contains("clashes"));
        let h = annual_description(PillarPosition::Day, false, Lang::En);
        assert!(h.contains("combines"));
    }
}
