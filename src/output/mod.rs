//! Output formatting module
//!
//! Provides various output formats for lookups and registry listings.

mod formatter;

pub use formatter::{EntryFormatter, OutputFormat};
