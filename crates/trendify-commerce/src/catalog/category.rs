//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Tag that selects every category in filters and summaries.
pub const ALL_CATEGORIES: &str = "all";

/// The closed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Electronics,
    Accessories,
    Footwear,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 4] = [
        Category::Clothing,
        Category::Electronics,
        Category::Accessories,
        Category::Footwear,
    ];

    /// Lowercase tag used in filters and markup.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Electronics => "electronics",
            Category::Accessories => "accessories",
            Category::Footwear => "footwear",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Footwear => "Footwear",
        }
    }

    /// Look up a category by exact tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A category row for navigation: tag, label and how many products it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub tag: &'static str,
    pub name: &'static str,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Some(category));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Category::from_tag("Clothing"), None);
        assert!(matches!(
            "toys".parse::<Category>(),
            Err(CommerceError::UnknownCategory(tag)) if tag == "toys"
        ));
    }
}
