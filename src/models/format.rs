//! Format models
//!
//! Defines the built-in formats and the identifier/output pairs the resolver
//! is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Json,
    Xml,
    Csv,
    Yaml,
    Text,
}

impl FormatKind {
    /// Get the format identifier
    pub fn identifier(&self) -> &'static str {
        match self {
            FormatKind::Json => "json",
            FormatKind::Xml => "xml",
            FormatKind::Csv => "csv",
            FormatKind::Yaml => "yaml",
            FormatKind::Text => "text",
        }
    }

    /// Get the representative output
    pub fn representative(&self) -> &'static str {
        match self {
            FormatKind::Json => "{}",
            FormatKind::Xml => "<xml/>",
            FormatKind::Csv => ",",
            FormatKind::Yaml => "---",
            FormatKind::Text => "txt",
        }
    }

    /// Get all built-in formats
    pub fn all() -> Vec<FormatKind> {
        vec![
            FormatKind::Json,
            FormatKind::Xml,
            FormatKind::Csv,
            FormatKind::Yaml,
            FormatKind::Text,
        ]
    }

    /// Parse from an identifier.
    ///
    /// Matching is exact: `"JSON"` is not a built-in identifier.
    pub fn from_identifier(s: &str) -> Option<FormatKind> {
        match s {
            "json" => Some(FormatKind::Json),
            "xml" => Some(FormatKind::Xml),
            "csv" => Some(FormatKind::Csv),
            "yaml" => Some(FormatKind::Yaml),
            "text" => Some(FormatKind::Text),
            _ => None,
        }
    }

    /// Convert into a registry entry
    pub fn entry(&self) -> FormatEntry {
        FormatEntry::new(self.identifier(), self.representative())
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Identifier and representative output pair
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatEntry {
    pub identifier: String,
    pub output: String,
}

impl FormatEntry {
    pub fn new(identifier: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            output: output.into(),
        }
    }

    /// Whether this entry is one of the built-in formats
    pub fn is_builtin(&self) -> bool {
        FormatKind::from_identifier(&self.identifier)
            .map(|kind| kind.representative() == self.output)
            .unwrap_or(false)
    }
}

impl From<FormatKind> for FormatEntry {
    fn from(kind: FormatKind) -> Self {
        kind.entry()
    }
}

/// Outcome of looking up a single identifier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub identifier: String,
    pub output: Option<String>,
}

impl Resolution {
    pub fn found(identifier: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            output: Some(output.into()),
        }
    }

    pub fn missing(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            output: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.output.is_some()
    }

    /// Output with the empty-string fallback for unknown identifiers
    pub fn output_or_empty(&self) -> &str {
        self.output.as_deref().unwrap_or("")
    }
}
