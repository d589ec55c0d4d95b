// ABOUTME: Food name keyword tables used by the health score heuristic
// ABOUTME: Additive food groups plus an if/else-if beverage tier list with diet-label handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Keyword tables for the health score heuristic.
//!
//! Names are matched after lower-casing, by substring unless a rule lists
//! `exact` names. Korean and English spellings live side by side.

use serde::Serialize;

/// A single matching rule
///
/// Matches when the name contains any `any_of` keyword (or equals any `exact`
/// name), contains at least one `with_any_of` keyword when that list is
/// non-empty, and contains none of the `none_of` keywords.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Substrings, any of which triggers the rule
    pub any_of: &'static [&'static str],
    /// Whole names that trigger the rule
    pub exact: &'static [&'static str],
    /// Companion substrings, one of which must also be present
    pub with_any_of: &'static [&'static str],
    /// Substrings that veto the rule
    pub none_of: &'static [&'static str],
}

impl KeywordRule {
    const fn any(any_of: &'static [&'static str]) -> Self {
        Self {
            any_of,
            exact: &[],
            with_any_of: &[],
            none_of: &[],
        }
    }

    const fn exact(exact: &'static [&'static str]) -> Self {
        Self {
            any_of: &[],
            exact,
            with_any_of: &[],
            none_of: &[],
        }
    }

    const fn with(self, with_any_of: &'static [&'static str]) -> Self {
        Self {
            with_any_of,
            ..self
        }
    }

    const fn except(self, none_of: &'static [&'static str]) -> Self {
        Self { none_of, ..self }
    }

    /// Whether the lower-cased `name` satisfies this rule
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let triggered =
            self.exact.iter().any(|exact| *exact == name) || contains_any(name, self.any_of);
        triggered
            && (self.with_any_of.is_empty() || contains_any(name, self.with_any_of))
            && !contains_any(name, self.none_of)
    }
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Food category a keyword group scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Lean protein staples
    TopTierHealthy,
    /// Generally healthy foods
    Healthy,
    /// Reasonable everyday foods
    Decent,
    /// Common Korean one-dish meals
    OneDishMeal,
    /// Noodle dishes
    Noodle,
    /// Fried or greasy dishes
    Fried,
    /// Fast food
    FastFood,
    /// Desserts and snacks
    Dessert,
}

/// Keyword group applied additively
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    /// Category this group scores
    pub category: FoodCategory,
    /// Score delta when any rule matches
    pub delta: i32,
    /// Rules, any of which triggers the group
    pub rules: &'static [KeywordRule],
}

impl KeywordGroup {
    /// Whether any rule in the group matches the lower-cased `name`
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(name))
    }
}

/// Beverage tier; the first matching tier wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageTier {
    /// Sodas, milkshakes, slushes
    VeryBad,
    /// Juices, sweet smoothies, ades, milky coffee
    Bad,
    /// Plain coffee
    Moderate,
    /// Water, unsweetened tea, a few vegetable juices
    Good,
}

impl BeverageTier {
    /// Base score delta for the tier
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::VeryBad => -3,
            Self::Bad => -2,
            Self::Moderate => -1,
            Self::Good => 1,
        }
    }
}

/// Every food group, applied in order; all matching groups contribute
pub const FOOD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        category: FoodCategory::TopTierHealthy,
        delta: 3,
        rules: &[
            KeywordRule::any(&[
                "닭가슴살",
                "연어",
                "계란흰자",
                "달걀흰자",
                "프로틴",
                "단백질 쉐이크",
                "단백질쉐이크",
                "단백질 파우더",
                "chicken breast",
                "salmon",
                "egg white",
                "protein shake",
                "protein powder",
            ]),
            KeywordRule::any(&["샐러드", "salad"]).with(&["닭", "치킨", "chicken"]),
        ],
    },
    KeywordGroup {
        category: FoodCategory::Healthy,
        delta: 2,
        rules: &[
            KeywordRule::any(&["두부", "tofu"]),
            KeywordRule::any(&["계란", "달걀", "egg"]).except(&["흰자", "white", "eggplant", "veggie"]),
            KeywordRule::any(&["샐러드", "salad"]).except(&["닭", "치킨", "chicken", "연어", "salmon"]),
            KeywordRule::any(&[
                "현미",
                "잡곡",
                "오트밀",
                "고구마",
                "브로콜리",
                "콩",
                "견과",
                "아몬드",
                "그릭요거트",
                "brown rice",
                "mixed grain",
                "oatmeal",
                "sweet potato",
                "broccoli",
                "beans",
                "almond",
                "greek yogurt",
            ]),
            KeywordRule::any(&["nuts"]).except(&["donut", "doughnut"]),
        ],
    },
    KeywordGroup {
        category: FoodCategory::Decent,
        delta: 1,
        rules: &[
            KeywordRule::any(&[
                "김치",
                "된장국",
                "미역국",
                "바나나",
                "사과",
                "귤",
                "닭안심",
                "kimchi",
                "miso soup",
                "seaweed soup",
                "banana",
                "apple",
                "pear",
                "tangerine",
                "chicken tenderloin",
            ]),
            KeywordRule::exact(&["배"]),
            KeywordRule::any(&["요거트", "요구르트", "yogurt"]).except(&["그릭", "greek"]),
        ],
    },
    KeywordGroup {
        category: FoodCategory::OneDishMeal,
        delta: -1,
        rules: &[KeywordRule::any(&[
            "찌개",
            "전골",
            "불고기",
            "비빔밥",
            "짜장면",
            "짜장",
            "볶음밥",
            "김밥",
            "덮밥",
            "국밥",
            "제육",
            "bulgogi",
            "bibimbap",
            "jjajangmyeon",
            "fried rice",
            "gimbap",
            "stew",
        ])],
    },
    KeywordGroup {
        category: FoodCategory::Noodle,
        delta: -2,
        rules: &[KeywordRule::any(&[
            "파스타",
            "국수",
            "스파게티",
            "냉면",
            "pasta",
            "noodle",
            "spaghetti",
        ])],
    },
    KeywordGroup {
        category: FoodCategory::Fried,
        delta: -2,
        rules: &[KeywordRule::any(&[
            "돈까스",
            "돈가스",
            "탕수육",
            "치킨까스",
            "닭강정",
            "깐풍기",
            "튀김",
            "마라",
            "라면",
            "우동",
            "pork cutlet",
            "tonkatsu",
            "sweet and sour pork",
            "mala",
            "ramen",
            "ramyeon",
            "udon",
        ])],
    },
    KeywordGroup {
        category: FoodCategory::FastFood,
        delta: -3,
        rules: &[
            KeywordRule::any(&[
                "피자",
                "버거",
                "맥도날드",
                "버거킹",
                "롯데리아",
                "양념치킨",
                "후라이드",
                "프라이드치킨",
                "떡볶이",
                "pizza",
                "burger",
                "mcdonald",
                "kfc",
                "fried chicken",
                "tteokbokki",
            ]),
            KeywordRule::any(&["치킨"]).except(&["샐러드", "까스", "가스"]),
        ],
    },
    KeywordGroup {
        category: FoodCategory::Dessert,
        delta: -2,
        rules: &[KeywordRule::any(&[
            "케이크",
            "아이스크림",
            "쿠키",
            "초콜릿",
            "사탕",
            "빵",
            "도넛",
            "타르트",
            "마카롱",
            "와플",
            "cake",
            "ice cream",
            "cookie",
            "chocolate",
            "candy",
            "bread",
            "donut",
            "doughnut",
            "tart",
            "macaron",
            "waffle",
        ])],
    },
];

/// Beverage tiers in priority order
pub const BEVERAGE_TIERS: &[(BeverageTier, &[KeywordRule])] = &[
    (
        BeverageTier::VeryBad,
        &[
            KeywordRule::any(&["콜라", "cola"]).except(&["chocolate"]),
            KeywordRule::any(&[
                "사이다",
                "탄산",
                "밀크쉐이크",
                "슬러시",
                "coke",
                "soda",
                "milkshake",
                "slush",
            ]),
        ],
    ),
    (
        BeverageTier::Bad,
        &[
            KeywordRule::any(&["주스", "juice"]).except(&["수박", "토마토", "watermelon", "tomato"]),
            KeywordRule::any(&["스무디", "smoothie"]).except(&["프로틴", "단백질", "protein"]),
            KeywordRule::any(&[
                "에이드",
                "라떼",
                "카푸치노",
                "lemonade",
                "latte",
                "cappuccino",
            ]),
        ],
    ),
    (
        BeverageTier::Moderate,
        &[KeywordRule::any(&["커피", "아메리카노", "coffee", "americano"])],
    ),
    (
        BeverageTier::Good,
        &[
            KeywordRule::exact(&["물", "water"]),
            KeywordRule::any(&[
                "생수",
                "녹차",
                "보리차",
                "수박주스",
                "토마토주스",
                "식혜",
                "green tea",
                "barley tea",
                "watermelon juice",
                "tomato juice",
            ]),
        ],
    ),
];

/// Labels marking a sugar-free variant of a very bad beverage
pub const DIET_MARKERS: &[&str] = &["제로", "다이어트", "zero", "diet"];

/// First beverage tier matching the lower-cased `name`
#[must_use]
pub fn beverage_tier(name: &str) -> Option<BeverageTier> {
    BEVERAGE_TIERS
        .iter()
        .find(|(_, rules)| rules.iter().any(|rule| rule.matches(name)))
        .map(|(tier, _)| *tier)
}

/// Whether the lower-cased `name` carries a diet label
#[must_use]
pub fn is_diet_labeled(name: &str) -> bool {
    contains_any(name, DIET_MARKERS)
}
