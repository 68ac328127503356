//! Plain-text report generation
//!
//! Layout:
//! ```text
//! ******** SMART EXPENSE ANALYZER REPORT ********
//!
//! Total Spent: ₹800.00
//! Highest Spending Category: Food
//!
//! ----- Category Wise Breakdown -----
//! Food            : ₹500.00
//! ...
//!
//! Predicted Monthly Expense: ₹8000.00
//!
//! ----- AI Suggestions -----
//! - <suggestion>
//! ```

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::models::{Analysis, Category, CategoryTotal};

const BANNER: &str = "******** SMART EXPENSE ANALYZER REPORT ********";
const CURRENCY: &str = "₹";

/// Everything that goes into the report file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_expense: f64,
    pub highest_category: Category,
    /// Rendered in the given order
    pub category_totals: Vec<CategoryTotal>,
    pub predicted_monthly: f64,
    pub advice: Vec<String>,
}

impl Report {
    pub fn new(
        total_expense: f64,
        highest_category: Category,
        category_totals: Vec<CategoryTotal>,
        predicted_monthly: f64,
        advice: Vec<String>,
    ) -> Self {
        Self {
            total_expense,
            highest_category,
            category_totals,
            predicted_monthly,
            advice,
        }
    }

    pub fn from_analysis(analysis: &Analysis, advice: Vec<String>) -> Self {
        Self::new(
            analysis.total_expense,
            analysis.highest_category,
            analysis.category_totals.clone(),
            analysis.predicted_monthly,
            advice,
        )
    }

    /// Render the fixed text layout
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Replace the file at `path` with the rendered report
    ///
    /// The content goes to a temporary file beside `path` first and is then
    /// renamed over it, so an interrupted write leaves any previous report intact.
    /// An existing report keeps its permissions; a new one gets `rw-r--r--`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;

        // Temp files are created owner-only
        let permissions = match fs::metadata(path) {
            Ok(meta) => Some(meta.permissions()),
            Err(_) => new_report_permissions(),
        };
        if let Some(permissions) = permissions {
            file.as_file().set_permissions(permissions)?;
        }
        file.persist(path).map_err(|e| e.error)?;

        info!("Wrote report to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", BANNER)?;
        writeln!(f, "Total Spent: {}", money(self.total_expense))?;
        writeln!(f, "Highest Spending Category: {}\n", self.highest_category)?;

        writeln!(f, "----- Category Wise Breakdown -----")?;
        for total in &self.category_totals {
            writeln!(f, "{:15} : {}", total.category, money(total.amount))?;
        }

        writeln!(
            f,
            "\nPredicted Monthly Expense: {}\n",
            money(self.predicted_monthly)
        )?;

        writeln!(f, "----- AI Suggestions -----")?;
        for tip in &self.advice {
            writeln!(f, "- {}", tip)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn new_report_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_report_permissions() -> Option<fs::Permissions> {
    None
}

fn money(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY, amount)
}
