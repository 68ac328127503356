//! Domain models for SmartSpend

use serde::{Deserialize, Serialize};

/// Spending bucket assigned to a transaction
///
/// Declaration order is the matching priority: a description that hits keywords
/// of several categories belongs to the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Shopping,
        Self::Entertainment,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` keeps width/alignment specifiers working in report layouts
        f.pad(self.as_str())
    }
}

/// One row of the expenses file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-text description; `None` when the cell is empty
    pub description: Option<String>,
    pub amount: f64,
}

/// A transaction together with its assigned category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedTransaction {
    pub transaction: Transaction,
    pub category: Category,
}

/// Summed spending for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
    pub transaction_count: usize,
}

/// Aggregate results for one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub transactions: Vec<CategorizedTransaction>,
    pub total_expense: f64,
    /// Non-empty categories, highest total first
    pub category_totals: Vec<CategoryTotal>,
    pub highest_category: Category,
    /// Mean amount per row (one row counts as one day)
    pub daily_avg: f64,
    /// `daily_avg * 30`, rounded to two decimals
    pub predicted_monthly: f64,
}

impl Analysis {
    /// Total for a category, if it had any transactions
    pub fn total_for(&self, category: Category) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.amount)
    }
}
