//! Decade-period guidance templates and daily do/don't lists.

use bazi_base::Element;

use crate::{Lang, Localized};

/// Overall tone of a decade, folded down from the five quality bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Supportive,
    Balanced,
    Testing,
}

/// Decade theme line by tone.
pub const fn decade_theme(tone: Tone) -> Localized {
    match tone {
        Tone::Supportive => Localized {
            en: "This decade tends to bring supportive opportunities and smoother progress.",
            zh_tw: "此十年多為順勢之運，較容易遇到助力與機會。",
            zh_cn: "此十年多为顺势之运，更容易遇到助力与机会。",
            ko: "이 10년은 지원적 기회와 순조로운 진전을 가져오는 경향이 있습니다.",
        },
        Tone::Balanced => Localized {
            en: "This decade is relatively balanced, offering steady growth if you act consciously.",
            zh_tw: "此十年整體較為平衡，若能主動規劃，仍可穩健成長。",
            zh_cn: "此十年整体较为平衡，若能主动规划，仍可稳健成长。",
            ko: "이 10년은 상대적으로 균형 잡혀 있으며, 의식적으로 행동하면 꾸준한 성장을 제공합니다.",
        },
        Tone::Testing => Localized {
            en: "This decade may feel more testing, but it is powerful for inner growth and restructuring.",
            zh_tw: "此十年較具考驗，但也是調整體質、重整方向的關鍵期。",
            zh_cn: "此十年较具考验，但也是调整体质、重整方向的关键期。",
            ko: "이 10년은 더 시험적일 수 있지만, 내적 성장과 재구조화에 강력합니다.",
        },
    }
}

/// The five life domains a decade can emphasize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeDomain {
    Career,
    Wealth,
    Relationships,
    Health,
    Learning,
}

/// Focus line, caution line (for testing decades), and action line (for
/// supportive ones) per emphasized domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainGuidance {
    pub focus: Localized,
    pub caution: Option<Localized>,
    pub action: Localized,
}

/// Guidance templates for an emphasized domain.
pub const fn domain_guidance(domain: LifeDomain) -> DomainGuidance {
    match domain {
        LifeDomain::Career => DomainGuidance {
            focus: Localized {
                en: "Consider strategic career moves, role changes, or taking on more visible responsibilities.",
                zh_tw: "事業面適合做策略性布局：調整跑道、升遷或承擔更高能見度的責任。",
                zh_cn: "事业面适合做策略性布局：调整跑道、升迁或承担更高能见度的责任。",
                ko: "전략적 직업 이동, 역할 변경 또는 더 눈에 띄는 책임을 맡는 것을 고려하세요.",
            },
            caution: Some(Localized {
                en: "Avoid impulsive job changes; prepare skills and networks before major moves.",
                zh_tw: "避免衝動轉職；重大變動前先備妥技能與人脈。",
                zh_cn: "避免冲动跳槽；重大变动前先备妥技能与人脉。",
                ko: "충동적인 직업 변경을 피하고, 중대한 변화 전에 기술과 인맥을 준비하세요.",
            }),
            action: Localized {
                en: "Invest in leadership skills, reputation-building, and long-term career positioning.",
                zh_tw: "投資在領導力、口碑與長線職涯定位。",
                zh_cn: "投资在领导力、口碑与长期职业定位。",
                ko: "리더십, 평판 구축 및 장기 직업 포지셔닝에 투자하세요.",
            },
        },
        LifeDomain::Wealth => DomainGuidance {
            focus: Localized {
                en: "Strengthen your financial foundation, savings, and long-term assets.",
                zh_tw: "財務面宜打底：儲蓄、現金流與長期資產配置。",
                zh_cn: "财务面宜打底：储蓄、现金流与长期资产配置。",
                ko: "재정 기반, 저축 및 장기 자산을 강화하세요.",
            },
            caution: Some(Localized {
                en: "Be conservative with debt and speculative investments; prioritize cash flow stability.",
                zh_tw: "保守看待負債與投機；優先維持現金流穩定。",
                zh_cn: "保守看待负债与投机；优先维持现金流稳定。",
                ko: "부채와 투기적 투자에 보수적이고, 현금 흐름 안정성을 우선시하세요.",
            }),
            action: Localized {
                en: "Plan for long-term investments and gradual asset accumulation.",
                zh_tw: "規劃長期投資，循序累積資產。",
                zh_cn: "规划长期投资，循序累积资产。",
                ko: "장기 투자와 점진적 자산 축적을 계획하세요.",
            },
        },
        LifeDomain::Relationships => DomainGuidance {
            focus: Localized {
                en: "Relationships, partnerships, and social connections are highlighted.",
                zh_tw: "人際／伴侶關係是重點：合作、婚戀與社交連結更受影響。",
                zh_cn: "人际／伴侣关系是重点：合作、婚恋与社交连结更受影响。",
                ko: "관계, 파트너십 및 사회적 연결이 강조됩니다.",
            },
            caution: Some(Localized {
                en: "Attend to communication patterns and emotional triggers to avoid unnecessary conflicts.",
                zh_tw: "留意溝通模式與情緒觸發點，避免無謂的衝突。",
                zh_cn: "留意沟通模式与情绪触发点，避免无谓的冲突。",
                ko: "불필요한 갈등을 피하기 위해 의사소통 패턴과 감정적 트리거에 주의하세요.",
            }),
            action: Localized {
                en: "Deepen key relationships and nurture supportive communities around you.",
                zh_tw: "深化重要關係，經營能支持你的圈子與社群。",
                zh_cn: "深化重要关系，经营能支持你的圈子与社群。",
                ko: "핵심 관계를 심화하고 주변의 지원적인 공동체를 육성하세요.",
            },
        },
        LifeDomain::Health => DomainGuidance {
            focus: Localized {
                en: "Body, energy, and emotional resilience require attention.",
                zh_tw: "健康與精力管理很重要：作息、情緒韌性與壓力調節需特別留意。",
                zh_cn: "健康与精力管理很重要：作息、情绪韧性与压力调节需特别留意。",
                ko: "몸, 에너지 및 감정적 회복력에 주의가 필요합니다.",
            },
            caution: Some(Localized {
                en: "Avoid overwork and ignoring early health signals; build sustainable routines.",
                zh_tw: "避免過勞與忽視警訊；建立可長期維持的健康習慣。",
                zh_cn: "避免过劳与忽视信号；建立可长期维持的健康习惯。",
                ko: "과로와 초기 건강 신호 무시를 피하고, 지속 가능한 루틴을 구축하세요.",
            }),
            action: Localized {
                en: "Establish strong daily routines for sleep, movement, and nourishment.",
                zh_tw: "建立穩定的睡眠、運動與飲食規律。",
                zh_cn: "建立稳定的睡眠、运动与饮食规律。",
                ko: "수면, 운동 및 영양을 위한 강력한 일상 루틴을 확립하세요.",
            },
        },
        LifeDomain::Learning => DomainGuidance {
            focus: Localized {
                en: "Learning, inner work, and skill-building are especially fruitful in this decade.",
                zh_tw: "學習與內在修練有利：進修、累積技能與找到良師益友。",
                zh_cn: "学习与内在修炼有利：进修、累积技能与找到良师益友。",
                ko: "학습, 내적 수양 및 기술 구축이 이 10년에 특히 유익합니다.",
            },
            caution: None,
            action: Localized {
                en: "Pursue structured learning, mentorship, or spiritual/inner development practices.",
                zh_tw: "建議採取結構化學習、尋找導師，或進行身心靈的內在成長練習。",
                zh_cn: "建议采取结构化学习、寻找导师，或进行身心灵的内在成长练习。",
                ko: "구조화된 학습, 멘토십 또는 영적/내적 발전 실천을 추구하세요.",
            },
        },
    }
}

/// Age-interpolated decade summary line.
pub fn decade_summary(start_age: u32, end_age: u32, lang: Lang) -> String {
    match lang {
        Lang::En => format!(
            "From about age {start_age} to {end_age}, focus on steady work in the highlighted \
             areas—this decade is about building foundations for the next cycles."
        ),
        Lang::ZhTw => format!(
            "約在 {start_age}–{end_age} 歲之間，建議把重點放在上述面向的穩健經營；此十年適合打底，為下一輪運勢累積能量。"
        ),
        Lang::ZhCn => format!(
            "约在 {start_age}–{end_age} 岁之间，建议把重点放在上述面向的稳健经营；此十年适合打底，为下一轮运势累积能量。"
        ),
        Lang::Ko => format!(
            "약 {start_age}–{end_age}세 사이에 강조된 영역에서 꾸준한 작업에 집중하세요—이 10년은 다음 주기를 위한 기반을 구축하는 시기입니다."
        ),
    }
}

/// Daily "do" suggestions when an element is favorable.
pub const fn dos(element: Element) -> [Localized; 4] {
    match element {
        Element::Wood => [
            Localized {
                en: "Spend time in nature or parks",
                zh_tw: "走進大自然或公園",
                zh_cn: "走进大自然或公园",
                ko: "자연이나 공원에서 시간을 보내세요",
            },
            Localized {
                en: "Wear green or teal clothing",
                zh_tw: "穿綠色或青色衣物",
                zh_cn: "穿绿色或青色衣物",
                ko: "녹색이나 청록색 옷을 입으세요",
            },
            Localized {
                en: "Start new creative projects",
                zh_tw: "開始新的創意計畫",
                zh_cn: "开始新的创意计划",
                ko: "새로운 창작 프로젝트를 시작하세요",
            },
            Localized {
                en: "Read, study or learn something new",
                zh_tw: "閱讀、學習新事物",
                zh_cn: "阅读、学习新事物",
                ko: "독서하거나 새로운 것을 배우세요",
            },
        ],
        Element::Fire => [
            Localized {
                en: "Network and socialize actively",
                zh_tw: "積極社交與拓展人脈",
                zh_cn: "积极社交与拓展人脉",
                ko: "적극적으로 사교하고 네트워크를 넓히세요",
            },
            Localized {
                en: "Present ideas or perform publicly",
                zh_tw: "展現想法或公開表現",
                zh_cn: "展现想法或公开表现",
                ko: "아이디어를 발표하거나 공개적으로 활동하세요",
            },
            Localized {
                en: "Wear warm colors (red, orange, purple)",
                zh_tw: "穿暖色系（紅橙紫）",
                zh_cn: "穿暖色系（红橙紫）",
                ko: "따뜻한 색상 (빨강, 주황, 보라) 옷을 입으세요",
            },
            Localized {
                en: "Take bold, decisive actions",
                zh_tw: "採取大膽果決的行動",
                zh_cn: "采取大胆果决的行动",
                ko: "대담하고 결단력 있는 행동을 하세요",
            },
        ],
        Element::Earth => [
            Localized {
                en: "Organize your space and plans",
                zh_tw: "整理空間與計畫",
                zh_cn: "整理空间与计划",
                ko: "공간과 계획을 정리하세요",
            },
            Localized {
                en: "Focus on stable routines",
                zh_tw: "專注於穩定作息",
                zh_cn: "专注于稳定作息",
                ko: "안정적인 루틴에 집중하세요",
            },
            Localized {
                en: "Review finances and budgets",
                zh_tw: "檢視財務與預算",
                zh_cn: "检视财务与预算",
                ko: "재정과 예산을 점검하세요",
            },
            Localized {
                en: "Nurture existing relationships",
                zh_tw: "維繫現有人際關係",
                zh_cn: "维系现有人际关系",
                ko: "기존 인간관계를 돌보세요",
            },
        ],
        Element::Metal => [
            Localized {
                en: "Negotiate or sign agreements",
                zh_tw: "洽談或簽署協議",
                zh_cn: "洽谈或签署协议",
                ko: "협상하거나 계약을 체결하세요",
            },
            Localized {
                en: "Focus on precision and detail work",
                zh_tw: "專注精密與細節工作",
                zh_cn: "专注精密与细节工作",
                ko: "정밀하고 세밀한 작업에 집중하세요",
            },
            Localized {
                en: "Wear white, silver or gold accessories",
                zh_tw: "佩戴白色、銀色或金色配飾",
                zh_cn: "佩戴白色、银色或金色配饰",
                ko: "흰색, 은색 또는 금색 액세서리를 착용하세요",
            },
            Localized {
                en: "Make important decisions with clarity",
                zh_tw: "以清晰頭腦做重要決定",
                zh_cn: "以清晰头脑做重要决定",
                ko: "명확한 마음으로 중요한 결정을 하세요",
            },
        ],
        Element::Water => [
            Localized {
                en: "Meditate or practice mindfulness",
                zh_tw: "冥想或練習正念",
                zh_cn: "冥想或练习正念",
                ko: "명상이나 마음 챙김을 실천하세요",
            },
            Localized {
                en: "Research and gather information",
                zh_tw: "調研與蒐集資訊",
                zh_cn: "调研与搜集资讯",
                ko: "조사하고 정보를 수집하세요",
            },
            Localized {
                en: "Wear blue or dark tones",
                zh_tw: "穿藍色或深色調衣物",
                zh_cn: "穿蓝色或深色调衣物",
                ko: "파란색이나 어두운 톤의 옷을 입으세요",
            },
            Localized {
                en: "Go with the flow — stay flexible",
                zh_tw: "順勢而為、保持彈性",
                zh_cn: "顺势而为、保持弹性",
                ko: "흐름을 따르세요 — 유연하게 대처하세요",
            },
        ],
    }
}

/// Daily "don't" warnings when an element works against the chart.
pub const fn donts(element: Element) -> [Localized; 3] {
    match element {
        Element::Wood => [
            Localized {
                en: "Don't make impulsive career changes",
                zh_tw: "不要衝動轉職",
                zh_cn: "不要冲动跳槽",
                ko: "충동적인 직업 변경을 하지 마세요",
            },
            Localized {
                en: "Avoid confrontations and arguments",
                zh_tw: "避免衝突與爭吵",
                zh_cn: "避免冲突与争吵",
                ko: "대립과 다툼을 피하세요",
            },
            Localized {
                en: "Don't overcommit to new obligations",
                zh_tw: "不要過度承擔新義務",
                zh_cn: "不要过度承担新义务",
                ko: "새로운 의무를 과도하게 떠맡지 마세요",
            },
        ],
        Element::Fire => [
            Localized {
                en: "Don't engage in heated arguments",
                zh_tw: "不要加入激烈爭辯",
                zh_cn: "不要加入激烈争辩",
                ko: "격렬한 논쟁에 참여하지 마세요",
            },
            Localized {
                en: "Avoid high-risk financial decisions",
                zh_tw: "避免高風險財務決定",
                zh_cn: "避免高风险财务决定",
                ko: "고위험 재정적 결정을 피하세요",
            },
            Localized {
                en: "Don't overpromise or overextend",
                zh_tw: "不要過度承諾或勉強",
                zh_cn: "不要过度承诺或勉强",
                ko: "과도한 약속이나 무리를 하지 마세요",
            },
        ],
        Element::Earth => [
            Localized {
                en: "Don't resist necessary changes",
                zh_tw: "不要抗拒必要的改變",
                zh_cn: "不要抗拒必要的改变",
                ko: "필요한 변화에 저항하지 마세요",
            },
            Localized {
                en: "Avoid overthinking or ruminating",
                zh_tw: "避免過度思考或鑽牛角尖",
                zh_cn: "避免过度思考或钻牛角尖",
                ko: "과도한 생각이나 반추를 피하세요",
            },
            Localized {
                en: "Don't hoard resources unnecessarily",
                zh_tw: "不要不必要地囤積資源",
                zh_cn: "不要不必要地囤积资源",
                ko: "불필요하게 자원을 비축하지 마세요",
            },
        ],
        Element::Metal => [
            Localized {
                en: "Don't be overly rigid or critical",
                zh_tw: "不要過於僵化或苛刻",
                zh_cn: "不要过于僵化或苛刻",
                ko: "지나치게 경직되거나 비판적이지 마세요",
            },
            Localized {
                en: "Avoid unnecessary confrontation",
                zh_tw: "避免不必要的對抗",
                zh_cn: "避免不必要的对抗",
                ko: "불필요한 대립을 피하세요",
            },
            Localized {
                en: "Don't neglect self-care or rest",
                zh_tw: "不要忽略自我照顧與休息",
                zh_cn: "不要忽略自我照顾与休息",
                ko: "자기 관리와 휴식을 소홀히 하지 마세요",
            },
        ],
        Element::Water => [
            Localized {
                en: "Don't isolate yourself from others",
                zh_tw: "不要孤立自己",
                zh_cn: "不要孤立自己",
                ko: "스스로를 고립시키지 마세요",
            },
            Localized {
                en: "Avoid excessive worry about the future",
                zh_tw: "避免過度擔憂未來",
                zh_cn: "避免过度担忧未来",
                ko: "미래에 대한 과도한 걱정을 피하세요",
            },
            Localized {
                en: "Don't neglect structure and discipline",
                zh_tw: "不要忽視規律與紀律",
                zh_cn: "不要忽视规律与纪律",
                ko: "구조와 규율을 소홀히 하지 마세요",
            },
        ],
    }
}
