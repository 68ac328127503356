//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `report` - The analysis pipeline (resolve, load, aggregate, advise, write)
//! - `categories` - Keyword table inspection (categorize, categories)

pub mod categories;
pub mod report;

// Re-export command functions for main.rs
pub use categories::*;
pub use report::*;
