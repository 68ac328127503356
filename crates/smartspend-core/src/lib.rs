//! SmartSpend Core Library
//!
//! Pipeline stages for the expense analyzer, each usable on its own:
//! - Input file resolution next to the program
//! - CSV loading with schema validation
//! - Keyword-based categorization driven by an explicit category table
//! - Aggregation and a naive monthly projection
//! - Canned advice and the plain-text report

pub mod advice;
pub mod analysis;
pub mod categories;
pub mod error;
pub mod import;
pub mod models;
pub mod report;
pub mod resolve;

pub use advice::advise;
pub use analysis::{aggregate, load_and_aggregate};
pub use categories::{CategoryRule, CategoryTable};
pub use error::{Error, Result};
pub use models::{Analysis, CategorizedTransaction, Category, CategoryTotal, Transaction};
pub use report::Report;
pub use resolve::InputResolver;
