//! Data models
//!
//! Core data structures for format entries and lookups.

mod format;

pub use format::{FormatEntry, FormatKind, Resolution};
