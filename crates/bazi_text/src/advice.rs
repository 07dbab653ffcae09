//! Per-element practical advice and lucky-item tables.

use bazi_base::Element;

use crate::Localized;

/// Rich advice block attached to a Use-God element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementAdvice {
    pub colors: Localized,
    pub directions: Localized,
    pub seasons: Localized,
    pub careers: Localized,
    pub numbers: &'static str,
}

/// Advice for favoring an element in daily life.
pub const fn element_advice(element: Element) -> ElementAdvice {
    match element {
        Element::Wood => ElementAdvice {
            colors: Localized {
                en: "Green, Teal",
                zh_tw: "綠色、青色",
                zh_cn: "绿色、青色",
                ko: "초록색, 청록색",
            },
            directions: Localized {
                en: "East",
                zh_tw: "東方",
                zh_cn: "东方",
                ko: "동쪽",
            },
            seasons: Localized {
                en: "Spring",
                zh_tw: "春季",
                zh_cn: "春季",
                ko: "봄",
            },
            careers: Localized {
                en: "Education, publishing, design, forestry, fashion, health supplements",
                zh_tw: "教育、出版、設計、林業、時裝、保健",
                zh_cn: "教育、出版、设计、林业、时装、保健",
                ko: "교육, 출판, 디자인, 임업, 패션, 건강보조식품",
            },
            numbers: "3, 8",
        },
        Element::Fire => ElementAdvice {
            colors: Localized {
                en: "Red, Orange, Purple",
                zh_tw: "紅色、橙色、紫色",
                zh_cn: "红色、橙色、紫色",
                ko: "빨간색, 주황색, 보라색",
            },
            directions: Localized {
                en: "South",
                zh_tw: "南方",
                zh_cn: "南方",
                ko: "남쪽",
            },
            seasons: Localized {
                en: "Summer",
                zh_tw: "夏季",
                zh_cn: "夏季",
                ko: "여름",
            },
            careers: Localized {
                en: "Technology, entertainment, energy, media, restaurants, lighting",
                zh_tw: "科技、娛樂、能源、媒體、餐飲、照明",
                zh_cn: "科技、娱乐、能源、媒体、餐饮、照明",
                ko: "기술, 엔터테인먼트, 에너지, 미디어, 요식업, 조명",
            },
            numbers: "2, 7",
        },
        Element::Earth => ElementAdvice {
            colors: Localized {
                en: "Yellow, Brown, Beige",
                zh_tw: "黃色、棕色、米色",
                zh_cn: "黄色、棕色、米色",
                ko: "노란색, 갈색, 베이지색",
            },
            directions: Localized {
                en: "Center, Northeast, Southwest",
                zh_tw: "中央、東北、西南",
                zh_cn: "中央、东北、西南",
                ko: "중앙, 동북, 서남",
            },
            seasons: Localized {
                en: "Late Summer / seasonal transitions",
                zh_tw: "四季交替之際",
                zh_cn: "四季交替之际",
                ko: "환절기",
            },
            careers: Localized {
                en: "Real estate, construction, agriculture, mining, insurance, warehousing",
                zh_tw: "房地產、建築、農業、礦業、保險、倉儲",
                zh_cn: "房地产、建筑、农业、矿业、保险、仓储",
                ko: "부동산, 건설, 농업, 광업, 보험, 창고업",
            },
            numbers: "5, 10",
        },
        Element::Metal => ElementAdvice {
            colors: Localized {
                en: "White, Silver, Gold",
                zh_tw: "白色、銀色、金色",
                zh_cn: "白色、银色、金色",
                ko: "흰색, 은색, 금색",
            },
            directions: Localized {
                en: "West",
                zh_tw: "西方",
                zh_cn: "西方",
                ko: "서쪽",
            },
            seasons: Localized {
                en: "Autumn",
                zh_tw: "秋季",
                zh_cn: "秋季",
                ko: "가을",
            },
            careers: Localized {
                en: "Finance, banking, law, engineering, automotive, jewelry, IT hardware",
                zh_tw: "金融、銀行、法律、工程、汽車、珠寶、IT硬件",
                zh_cn: "金融、银行、法律、工程、汽车、珠宝、IT硬件",
                ko: "금융, 은행, 법률, 공학, 자동차, 보석, IT 하드웨어",
            },
            numbers: "4, 9",
        },
        Element::Water => ElementAdvice {
            colors: Localized {
                en: "Black, Blue, Dark Grey",
                zh_tw: "黑色、藍色、深灰色",
                zh_cn: "黑色、蓝色、深灰色",
                ko: "검은색, 파란색, 짙은 회색",
            },
            directions: Localized {
                en: "North",
                zh_tw: "北方",
                zh_cn: "北方",
                ko: "북쪽",
            },
            seasons: Localized {
                en: "Winter",
                zh_tw: "冬季",
                zh_cn: "冬季",
                ko: "겨울",
            },
            careers: Localized {
                en: "Logistics, shipping, tourism, beverages, consulting, communication",
                zh_tw: "物流、航運、旅遊、飲料、諮詢、通訊",
                zh_cn: "物流、航运、旅游、饮料、咨询、通讯",
                ko: "물류, 해운, 관광, 음료, 컨설팅, 통신",
            },
            numbers: "1, 6",
        },
    }
}

/// Single daily lucky color.
pub const fn lucky_color(element: Element) -> Localized {
    match element {
        Element::Wood => Localized {
            en: "Green",
            zh_tw: "綠色",
            zh_cn: "绿色",
            ko: "초록색",
        },
        Element::Fire => Localized {
            en: "Red / Orange",
            zh_tw: "紅色",
            zh_cn: "红色",
            ko: "빨간색",
        },
        Element::Earth => Localized {
            en: "Yellow / Brown",
            zh_tw: "黃色",
            zh_cn: "黄色",
            ko: "노란색",
        },
        Element::Metal => Localized {
            en: "White / Silver / Gold",
            zh_tw: "白色",
            zh_cn: "白色",
            ko: "흰색",
        },
        Element::Water => Localized {
            en: "Blue / Black",
            zh_tw: "藍色",
            zh_cn: "蓝色",
            ko: "파란색",
        },
    }
}

/// Daily lucky direction.
pub const fn lucky_direction(element: Element) -> Localized {
    match element {
        Element::Wood => Localized {
            en: "East",
            zh_tw: "東方",
            zh_cn: "东方",
            ko: "동쪽",
        },
        Element::Fire => Localized {
            en: "South",
            zh_tw: "南方",
            zh_cn: "南方",
            ko: "남쪽",
        },
        Element::Earth => Localized {
            en: "Center",
            zh_tw: "中央",
            zh_cn: "中央",
            ko: "중앙",
        },
        Element::Metal => Localized {
            en: "West",
            zh_tw: "西方",
            zh_cn: "西方",
            ko: "서쪽",
        },
        Element::Water => Localized {
            en: "North",
            zh_tw: "北方",
            zh_cn: "北方",
            ko: "북쪽",
        },
    }
}

/// Lucky numbers, language-independent.
pub const fn lucky_number(element: Element) -> &'static str {
    match element {
        Element::Wood => "3, 8",
        Element::Fire => "2, 7",
        Element::Earth => "5, 10",
        Element::Metal => "4, 9",
        Element::Water => "1, 6",
    }
}

/// Daily lucky object.
pub const fn lucky_object(element: Element) -> Localized {
    match element {
        Element::Wood => Localized {
            en: "Jade bracelet",
            zh_tw: "翡翠手鏈",
            zh_cn: "翡翠手链",
            ko: "옥 팔찌",
        },
        Element::Fire => Localized {
            en: "Red agate pendant",
            zh_tw: "紅瑪瑙吊墜",
            zh_cn: "红玛瑙吊坠",
            ko: "홍마노 펜던트",
        },
        Element::Earth => Localized {
            en: "Crystal sphere",
            zh_tw: "水晶球",
            zh_cn: "水晶球",
            ko: "수정 구슬",
        },
        Element::Metal => Localized {
            en: "Silver ring",
            zh_tw: "銀戒指",
            zh_cn: "银戒指",
            ko: "은반지",
        },
        Element::Water => Localized {
            en: "Obsidian bead",
            zh_tw: "黑曜石珠",
            zh_cn: "黑曜石珠",
            ko: "흑요석 구슬",
        },
    }
}

/// Daily lucky food.
pub const fn lucky_food(element: Element) -> Localized {
    match element {
        Element::Wood => Localized {
            en: "Green vegetables & sour fruits",
            zh_tw: "綠色蔬菜與酸味水果",
            zh_cn: "绿色蔬菜与酸味水果",
            ko: "녹색 채소와 신 과일",
        },
        Element::Fire => Localized {
            en: "Red fruits & spicy dishes",
            zh_tw: "紅色水果與辛辣料理",
            zh_cn: "红色水果与辛辣料理",
            ko: "붉은 과일과 매운 요리",
        },
        Element::Earth => Localized {
            en: "Root vegetables & sweet grains",
            zh_tw: "根莖類與甜味穀物",
            zh_cn: "根茎类与甜味谷物",
            ko: "뿌리 채소와 달콤한 곡물",
        },
        Element::Metal => Localized {
            en: "White foods (tofu, rice, pear)",
            zh_tw: "白色食物（豆腐、米、梨）",
            zh_cn: "白色食物（豆腐、米、梨）",
            ko: "흰 음식 (두부, 쌀, 배)",
        },
        Element::Water => Localized {
            en: "Seaweed, black beans & soups",
            zh_tw: "海帶、黑豆與湯品",
            zh_cn: "海带、黑豆与汤品",
            ko: "미역, 검은콩과 국",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lang;
    use bazi_base::ALL_ELEMENTS;

    #[test]
    fn advice_present_for_all_elements_and_languages() {
        for e in ALL_ELEMENTS {
            let a = element_advice(e);
            for lang in [Lang::En, Lang::ZhTw, Lang::ZhCn, Lang::Ko] {
                assert!(!a.colors.get(lang).is_empty());
                assert!(!a.careers.get(lang).is_empty());
            }
            assert!(!a.numbers.is_empty());
        }
    }

    #[test]
    fn lucky_tables_total() {
        for e in ALL_ELEMENTS {
            assert!(!lucky_color(e).get(Lang::En).is_empty());
            assert!(!lucky_object(e).get(Lang::Ko).is_empty());
            assert!(!lucky_food(e).get(Lang::ZhTw).is_empty());
            assert!(!lucky_number(e).is_empty());
        }
    }

    #[test]
    fn use_god_numbers_match_daily_numbers() {
        for e in ALL_ELEMENTS {
            assert_eq!(element_advice(e).numbers, lucky_number(e));
        }
    }
}
