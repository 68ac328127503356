//! Keyword-based category assignment
//!
//! A [`CategoryTable`] is an ordered list of (category, keywords) pairs. Matching
//! walks the table in order and returns the first category with any keyword
//! appearing as a substring of the lowercased description, so table order is
//! the tie-break between overlapping keywords.

use serde::Serialize;
use tracing::debug;

use crate::models::Category;

/// Category that absorbs every description no keyword matches
pub const FALLBACK: Category = Category::Other;

/// Keyword list owned by one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    pub category: Category,
    /// Lowercase substrings
    pub keywords: Vec<String>,
}

/// Immutable, ordered keyword configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    /// Build a table from (category, keywords) pairs, keeping their order
    ///
    /// Keywords are lowercased so matching against lowercased descriptions holds.
    pub fn new<I, K>(rules: I) -> Self
    where
        I: IntoIterator<Item = (Category, K)>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|(category, keywords)| CategoryRule {
                category,
                keywords: keywords
                    .into_iter()
                    .map(|k| k.as_ref().to_lowercase())
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Assign a category to a description
    ///
    /// Missing descriptions go straight to [`FALLBACK`] without scanning.
    pub fn categorize(&self, description: Option<&str>) -> Category {
        let Some(description) = description else {
            return FALLBACK;
        };

        let desc = description.to_lowercase();
        for rule in &self.rules {
            if let Some(keyword) = rule.keywords.iter().find(|k| desc.contains(k.as_str())) {
                debug!(
                    "Matched '{}' to {} via keyword '{}'",
                    description, rule.category, keyword
                );
                return rule.category;
            }
        }

        FALLBACK
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new([
            (
                Category::Food,
                vec!["swiggy", "zomato", "pizza", "hotel", "restaurant", "food"],
            ),
            (
                Category::Transport,
                vec!["uber", "ola", "bus", "train", "petrol", "diesel"],
            ),
            (
                Category::Utilities,
                vec!["electricity", "water", "recharge", "gas", "internet", "wifi"],
            ),
            (
                Category::Shopping,
                vec!["amazon", "flipkart", "shopping", "store", "mall"],
            ),
            (
                Category::Entertainment,
                vec!["netflix", "spotify", "movie", "gaming", "cinema"],
            ),
            (Category::Other, vec![]),
        ])
    }
}
