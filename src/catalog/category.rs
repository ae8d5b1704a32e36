//! Closed vocabulary of categories a unit can be filed under.
//!
//! Free-form category strings coming from declarations or config are folded
//! into this set by [`CategoryTag::normalize`]; anything unrecognized lands in
//! [`CategoryTag::Other`] rather than being rejected.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryTag {
    Ui,
    Interaction,
    ThreeD,
    Chart,
    Form,
    Layout,
    Media,
    CreativeCoding,
    #[default]
    Other,
}

// Labels and short slugs, lowercased, mapped back to their tag
static LOOKUP: Lazy<HashMap<String, CategoryTag>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for tag in CategoryTag::ALL {
        map.insert(tag.label().to_lowercase(), tag);
        map.insert(tag.slug().to_string(), tag);
    }
    map.insert("p5".to_string(), CategoryTag::CreativeCoding);
    map.insert("three".to_string(), CategoryTag::ThreeD);
    map
});

impl CategoryTag {
    /// Every category, in menu order.
    pub const ALL: [CategoryTag; 9] = [
        CategoryTag::Ui,
        CategoryTag::Interaction,
        CategoryTag::ThreeD,
        CategoryTag::Chart,
        CategoryTag::Form,
        CategoryTag::Layout,
        CategoryTag::Media,
        CategoryTag::CreativeCoding,
        CategoryTag::Other,
    ];

    /// Human-facing label shown in insertion menus.
    pub fn label(self) -> &'static str {
        match self {
            CategoryTag::Ui => "UI unit",
            CategoryTag::Interaction => "interaction unit",
            CategoryTag::ThreeD => "3D unit",
            CategoryTag::Chart => "chart unit",
            CategoryTag::Form => "form unit",
            CategoryTag::Layout => "layout unit",
            CategoryTag::Media => "media unit",
            CategoryTag::CreativeCoding => "creative-coding unit",
            CategoryTag::Other => "other",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryTag::Ui => "ui",
            CategoryTag::Interaction => "interaction",
            CategoryTag::ThreeD => "3d",
            CategoryTag::Chart => "chart",
            CategoryTag::Form => "form",
            CategoryTag::Layout => "layout",
            CategoryTag::Media => "media",
            CategoryTag::CreativeCoding => "creative",
            CategoryTag::Other => "other",
        }
    }

    /// Strict lookup by label or slug, case-insensitive.
    pub fn parse(raw: &str) -> Option<CategoryTag> {
        LOOKUP.get(raw.trim().to_lowercase().as_str()).copied()
    }

    /// Lenient lookup: unknown categories degrade to `Other` instead of failing.
    pub fn normalize(raw: &str) -> CategoryTag {
        match Self::parse(raw) {
            Some(tag) => tag,
            None => {
                warn!("Unknown unit category '{}', filing under '{}'", raw, CategoryTag::Other);
                CategoryTag::Other
            }
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<CategoryTag> for String {
    fn from(tag: CategoryTag) -> Self {
        tag.label().to_string()
    }
}

impl From<String> for CategoryTag {
    fn from(raw: String) -> Self {
        CategoryTag::normalize(&raw)
    }
}

impl From<&str> for CategoryTag {
    fn from(raw: &str) -> Self {
        CategoryTag::normalize(raw)
    }
}
