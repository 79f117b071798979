// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Fixed category catalog: canonical name, accepted synonyms (Vietnamese and
/// English), color token, and icon key. Lookup is case-insensitive and total;
/// unknown names fall back to a neutral gray and a generic icon.
///
/// Grouping in the breakdown stays case-sensitive on the stored name while
/// this lookup folds case, so "Food" and "food" style identically but count
/// as two categories. Kept for compatibility with recorded data; see
/// DESIGN.md.
pub struct CategoryMeta {
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
    pub color: &'static str,
    pub icon: &'static str,
}

pub const DEFAULT_COLOR: &str = "#6B7280";
pub const DEFAULT_ICON: &str = "category";

static CATALOG: &[CategoryMeta] = &[
    CategoryMeta {
        name: "Food",
        synonyms: &["ăn uống", "food", "restaurant"],
        color: "#F59E0B",
        icon: "restaurant",
    },
    CategoryMeta {
        name: "Transport",
        synonyms: &["giao thông", "transport", "car"],
        color: "#3B82F6",
        icon: "directions_car",
    },
    CategoryMeta {
        name: "Shopping",
        synonyms: &["mua sắm", "shopping", "bag"],
        color: "#8B5CF6",
        icon: "shopping_bag",
    },
    CategoryMeta {
        name: "Entertainment",
        synonyms: &["giải trí", "entertainment", "movie"],
        color: "#EC4899",
        icon: "movie",
    },
    CategoryMeta {
        name: "Health",
        synonyms: &["sức khỏe", "health", "medical"],
        color: "#10B981",
        icon: "local_hospital",
    },
    CategoryMeta {
        name: "Education",
        synonyms: &["học tập", "giáo dục", "education", "school"],
        color: "#06B6D4",
        icon: "school",
    },
    CategoryMeta {
        name: "Travel",
        synonyms: &["du lịch", "travel", "flight"],
        color: "#84CC16",
        icon: "flight",
    },
    CategoryMeta {
        name: "Other",
        synonyms: &["khác", "other", "misc"],
        color: "#6B7280",
        icon: "category",
    },
];

pub fn all() -> &'static [CategoryMeta] {
    CATALOG
}

pub fn metadata_for(name: &str) -> Option<&'static CategoryMeta> {
    let needle = name.trim().to_lowercase();
    CATALOG.iter().find(|c| c.synonyms.contains(&needle.as_str()))
}

pub fn color_for(name: &str) -> &'static str {
    metadata_for(name).map(|c| c.color).unwrap_or(DEFAULT_COLOR)
}

pub fn icon_for(name: &str) -> &'static str {
    metadata_for(name).map(|c| c.icon).unwrap_or(DEFAULT_ICON)
}
