//! Short localized labels: element names, pillar names and life areas,
//! punishment categories, double-hour names, weekday abbreviations.

use bazi_base::{EarthlyBranch, Element};
use bazi_calendar::PillarPosition;
use bazi_interactions::PunishmentKind;
use chrono::Weekday;

use crate::Localized;

/// Localized element name.
pub const fn element_name(element: Element) -> Localized {
    match element {
        Element::Wood => Localized {
            en: "Wood",
            zh_tw: "木",
            zh_cn: "木",
            ko: "목(木)",
        },
        Element::Fire => Localized {
            en: "Fire",
            zh_tw: "火",
            zh_cn: "火",
            ko: "화(火)",
        },
        Element::Earth => Localized {
            en: "Earth",
            zh_tw: "土",
            zh_cn: "土",
            ko: "토(土)",
        },
        Element::Metal => Localized {
            en: "Metal",
            zh_tw: "金",
            zh_cn: "金",
            ko: "금(金)",
        },
        Element::Water => Localized {
            en: "Water",
            zh_tw: "水",
            zh_cn: "水",
            ko: "수(水)",
        },
    }
}

/// Localized pillar name.
pub const fn pillar_name(position: PillarPosition) -> Localized {
    match position {
        PillarPosition::Year => Localized {
            en: "Year",
            zh_tw: "年柱",
            zh_cn: "年柱",
            ko: "년주",
        },
        PillarPosition::Month => Localized {
            en: "Month",
            zh_tw: "月柱",
            zh_cn: "月柱",
            ko: "월주",
        },
        PillarPosition::Day => Localized {
            en: "Day",
            zh_tw: "日柱",
            zh_cn: "日柱",
            ko: "일주",
        },
        PillarPosition::Hour => Localized {
            en: "Hour",
            zh_tw: "時柱",
            zh_cn: "时柱",
            ko: "시주",
        },
    }
}

/// Life area each pillar traditionally governs.
pub const fn pillar_life_area(position: PillarPosition) -> Localized {
    match position {
        PillarPosition::Year => Localized {
            en: "Ancestors/Parents",
            zh_tw: "祖輩/父母",
            zh_cn: "祖辈/父母",
            ko: "조상/부모",
        },
        PillarPosition::Month => Localized {
            en: "Career/Parents",
            zh_tw: "事業/父母",
            zh_cn: "事业/父母",
            ko: "직업/부모",
        },
        PillarPosition::Day => Localized {
            en: "Self/Spouse",
            zh_tw: "自身/配偶",
            zh_cn: "自身/配偶",
            ko: "자신/배우자",
        },
        PillarPosition::Hour => Localized {
            en: "Children/Legacy",
            zh_tw: "子女/晚年",
            zh_cn: "子女/晚年",
            ko: "자녀/만년",
        },
    }
}

/// Punishment category label.
pub const fn punishment_label(kind: PunishmentKind) -> Localized {
    match kind {
        PunishmentKind::Ungrateful => Localized {
            en: "Ungrateful Punishment",
            zh_tw: "無恩之刑",
            zh_cn: "无恩之刑",
            ko: "무은지형(無恩之刑)",
        },
        PunishmentKind::Bullying => Localized {
            en: "Bullying Punishment",
            zh_tw: "恃勢之刑",
            zh_cn: "恃势之刑",
            ko: "시세지형(恃勢之刑)",
        },
        PunishmentKind::Rude => Localized {
            en: "Rude Punishment",
            zh_tw: "無禮之刑",
            zh_cn: "无礼之刑",
            ko: "무례지형(無禮之刑)",
        },
    }
}

/// Double-hour (shichen) name for a branch.
pub const fn shichen_name(branch: EarthlyBranch) -> Localized {
    match branch {
        EarthlyBranch::Zi => Localized {
            en: "Zi",
            zh_tw: "子時",
            zh_cn: "子时",
            ko: "자시(子時)",
        },
        EarthlyBranch::Chou => Localized {
            en: "Chou",
            zh_tw: "丑時",
            zh_cn: "丑时",
            ko: "축시(丑時)",
        },
        EarthlyBranch::Yin => Localized {
            en: "Yin",
            zh_tw: "寅時",
            zh_cn: "寅时",
            ko: "인시(寅時)",
        },
        EarthlyBranch::Mao => Localized {
            en: "Mao",
            zh_tw: "卯時",
            zh_cn: "卯时",
            ko: "묘시(卯時)",
        },
        EarthlyBranch::Chen => Localized {
            en: "Chen",
            zh_tw: "辰時",
            zh_cn: "辰时",
            ko: "진시(辰時)",
        },
        EarthlyBranch::Si => Localized {
            en: "Si",
            zh_tw: "巳時",
            zh_cn: "巳时",
            ko: "사시(巳時)",
        },
        EarthlyBranch::Wu => Localized {
            en: "Wu",
            zh_tw: "午時",
            zh_cn: "午时",
            ko: "오시(午時)",
        },
        EarthlyBranch::Wei => Localized {
            en: "Wei",
            zh_tw: "未時",
            zh_cn: "未时",
            ko: "미시(未時)",
        },
        EarthlyBranch::Shen => Localized {
            en: "Shen",
            zh_tw: "申時",
            zh_cn: "申时",
            ko: "신시(申時)",
        },
        EarthlyBranch::You => Localized {
            en: "You",
            zh_tw: "酉時",
            zh_cn: "酉时",
            ko: "유시(酉時)",
        },
        EarthlyBranch::Xu => Localized {
            en: "Xu",
            zh_tw: "戌時",
            zh_cn: "戌时",
            ko: "술시(戌時)",
        },
        EarthlyBranch::Hai => Localized {
            en: "Hai",
            zh_tw: "亥時",
            zh_cn: "亥时",
            ko: "해시(亥時)",
        },
    }
}

/// Clock range covered by a branch's double-hour.
pub const fn shichen_time_range(branch: EarthlyBranch) -> &'static str {
    match branch {
        EarthlyBranch::Zi => "23:00-01:00",
        EarthlyBranch::Chou => "01:00-03:00",
        EarthlyBranch::Yin => "03:00-05:00",
        EarthlyBranch::Mao => "05:00-07:00",
        EarthlyBranch::Chen => "07:00-09:00",
        EarthlyBranch::Si => "09:00-11:00",
        EarthlyBranch::Wu => "11:00-13:00",
        EarthlyBranch::Wei => "13:00-15:00",
        EarthlyBranch::Shen => "15:00-17:00",
        EarthlyBranch::You => "17:00-19:00",
        EarthlyBranch::Xu => "19:00-21:00",
        EarthlyBranch::Hai => "21:00-23:00",
    }
}

/// Weekday abbreviation.
pub const fn weekday_name(weekday: Weekday) -> Localized {
    match weekday {
        Weekday::Mon => Localized {
            en: "Mon",
            zh_tw: "週一",
            zh_cn: "周一",
            ko: "월",
        },
        Weekday::Tue => Localized {
            en: "Tue",
            zh_tw: "週二",
            zh_cn: "周二",
            ko: "화",
        },
        Weekday::Wed => Localized {
            en: "Wed",
            zh_tw: "週三",
            zh_cn: "周三",
            ko: "수",
        },
        Weekday::Thu => Localized {
            en: "Thu",
            zh_tw: "週四",
            zh_cn: "周四",
            ko: "목",
        },
        Weekday::Fri => Localized {
            en: "Fri",
            zh_tw: "週五",
            zh_cn: "周五",
            ko: "금",
        },
        Weekday::Sat => Localized {
            en: "Sat",
            zh_tw: "週六",
            zh_cn: "周六",
            ko: "토",
        },
        Weekday::Sun => Localized {
            en: "Sun",
            zh_tw: "週日",
            zh_cn: "周日",
            ko: "일",
        },
    }
}
