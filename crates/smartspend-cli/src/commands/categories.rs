//! Category table commands

use anyhow::Result;
use smartspend_core::{CategoryRule, CategoryTable};

/// One-line answer for `categorize`, e.g. `Uber ride → Transport`
pub fn categorization_line(table: &CategoryTable, description: &str) -> String {
    format!("{} → {}", description, table.categorize(Some(description)))
}

/// Table row for `categories`
pub fn rule_line(rule: &CategoryRule) -> String {
    let keywords = if rule.keywords.is_empty() {
        "(fallback)".to_string()
    } else {
        rule.keywords.join(", ")
    };
    format!("   {:15} │ {}", rule.category, keywords)
}

pub fn cmd_categorize(description: &str) -> Result<()> {
    let table = CategoryTable::default();
    println!("{}", categorization_line(&table, description));
    Ok(())
}

pub fn cmd_categories() -> Result<()> {
    let table = CategoryTable::default();

    println!();
    println!("🏷️  Categories (matching order)");
    println!("   ─────────────────────────────────────────────────────────────");
    for rule in table.rules() {
        println!("{}", rule_line(rule));
    }
    println!();

    Ok(())
}
