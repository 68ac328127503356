//! Spending aggregation and the monthly projection
//!
//! The projection is deliberately naive: every row counts as one day, so the
//! "daily" average is the mean transaction amount and a month is 30 of them.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::categories::CategoryTable;
use crate::error::{Error, Result};
use crate::import::load_transactions;
use crate::models::{Analysis, CategorizedTransaction, Category, CategoryTotal, Transaction};

/// Days in a projected month
pub const PROJECTION_DAYS: f64 = 30.0;

/// Load the file at `path` and aggregate it
pub fn load_and_aggregate(path: &Path, table: &CategoryTable) -> Result<Analysis> {
    let transactions = load_transactions(path)?;
    info!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );
    aggregate(transactions, table)
}

/// Categorize every transaction and compute totals and the projection
///
/// Fails with [`Error::EmptyInput`] when there is nothing to average.
pub fn aggregate(transactions: Vec<Transaction>, table: &CategoryTable) -> Result<Analysis> {
    if transactions.is_empty() {
        return Err(Error::EmptyInput);
    }

    let transactions: Vec<CategorizedTransaction> = transactions
        .into_iter()
        .map(|transaction| CategorizedTransaction {
            category: table.categorize(transaction.description.as_deref()),
            transaction,
        })
        .collect();

    let total_expense: f64 = transactions.iter().map(|t| t.transaction.amount).sum();
    let category_totals = category_totals(&transactions);

    // Non-empty input always yields at least one category
    let highest_category = category_totals
        .first()
        .map(|t| t.category)
        .ok_or(Error::EmptyInput)?;

    let daily_avg = total_expense / transactions.len() as f64;
    let predicted_monthly = round_cents(daily_avg * PROJECTION_DAYS);

    debug!(
        "Total {:.2}, highest {}, daily avg {:.2}, predicted {:.2}",
        total_expense, highest_category, daily_avg, predicted_monthly
    );

    Ok(Analysis {
        transactions,
        total_expense,
        category_totals,
        highest_category,
        daily_avg,
        predicted_monthly,
    })
}

/// Sum amounts per category, highest total first
///
/// Categories without transactions are left out. Equal totals are ordered by
/// category priority (Food before Transport, and so on), so the result never
/// depends on row order.
pub fn category_totals(transactions: &[CategorizedTransaction]) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for t in transactions {
        let entry = sums.entry(t.category).or_insert((0.0, 0));
        entry.0 += t.transaction.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, (amount, transaction_count))| CategoryTotal {
            category,
            amount,
            transaction_count,
        })
        .collect();

    // BTreeMap iteration is already in priority order and sort_by is stable
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals
}

/// Round to two decimal places, halves away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
