//! CSV loading for the expenses file
//!
//! Expected header contains at least `Description` and `Amount` (any order,
//! extra columns ignored).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

pub const DESCRIPTION_COLUMN: &str = "Description";
pub const AMOUNT_COLUMN: &str = "Amount";

/// Columns that must be present in the header
pub const REQUIRED_COLUMNS: [&str; 2] = [DESCRIPTION_COLUMN, AMOUNT_COLUMN];

/// Load transactions from a CSV file on disk
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path).map_err(|e| Error::Load {
        message: format!("unable to open {}", path.display()),
        source: Some(csv::Error::from(e)),
    })?;
    parse_transactions(file)
}

/// Parse transactions from any CSV reader
pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let (description_col, amount_col) = locate_columns(&headers)?;

    let mut transactions = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;

        // An empty cell is how CSV spells a missing description
        let description = record
            .get(description_col)
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string());

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::load(format!("Missing amount in row {}", row)))?;
        let amount = parse_amount(amount_str).ok_or_else(|| {
            Error::load(format!(
                "Unable to parse amount in row {}: '{}'",
                row, amount_str
            ))
        })?;

        transactions.push(Transaction {
            description,
            amount,
        });
    }

    debug!("Parsed {} transactions", transactions.len());
    Ok(transactions)
}

/// Find the indices of the required columns, or report what was found instead
fn locate_columns(headers: &StringRecord) -> Result<(usize, usize)> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    match (position(DESCRIPTION_COLUMN), position(AMOUNT_COLUMN)) {
        (Some(description), Some(amount)) => Ok((description, amount)),
        _ => Err(Error::Schema {
            required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: headers.iter().map(|h| h.trim().to_string()).collect(),
        }),
    }
}

/// Parse an amount string, handling currency symbols and thousands separators
///
/// Parenthesized amounts like `(12.50)` are negative.
fn parse_amount(s: &str) -> Option<f64> {
    let s = s.trim();
    let (negative, s) = match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (true, inner.trim()),
        None => (false, s),
    };

    let cleaned = s.trim_start_matches(['₹', '$']).trim_start().replace(',', "");
    let amount = cleaned.parse::<f64>().ok().filter(|a| a.is_finite())?;
    Some(if negative { -amount } else { amount })
}
