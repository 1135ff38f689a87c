//! Format registry and lookup
//!
//! The registry is built once and never mutated afterwards, so a single
//! resolver can be shared freely across threads.

use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

use super::error::ResolverError;
use crate::models::{FormatEntry, FormatKind, Resolution};

lazy_static! {
    static ref DEFAULT_RESOLVER: FormatResolver = FormatResolver::new();
}

/// Resolve an identifier against the built-in formats.
///
/// Returns the empty string for anything that is not a built-in identifier.
pub fn resolve(identifier: &str) -> &'static str {
    DEFAULT_RESOLVER.resolve(identifier)
}

/// Immutable identifier to output mapping
#[derive(Clone, Debug)]
pub struct FormatResolver {
    entries: HashMap<String, String>,
}

impl FormatResolver {
    /// Create a resolver over the built-in formats
    pub fn new() -> Self {
        let entries = FormatKind::all()
            .into_iter()
            .map(|kind| (kind.identifier().to_string(), kind.representative().to_string()))
            .collect();

        Self { entries }
    }

    /// Start building a resolver seeded with the built-in formats
    pub fn builder() -> FormatResolverBuilder {
        FormatResolverBuilder::new()
    }

    /// Resolve an identifier to its output, or the empty string if unknown
    pub fn resolve(&self, identifier: &str) -> &str {
        self.lookup(identifier).unwrap_or("")
    }

    /// Resolve an identifier, distinguishing unknown identifiers
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Resolve an identifier into an owned result
    pub fn resolution(&self, identifier: &str) -> Resolution {
        match self.lookup(identifier) {
            Some(output) => Resolution::found(identifier, output),
            None => Resolution::missing(identifier),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Registered entries, sorted by identifier
    pub fn entries(&self) -> Vec<FormatEntry> {
        let mut entries: Vec<FormatEntry> = self
            .entries
            .iter()
            .map(|(id, output)| FormatEntry::new(id.as_str(), output.as_str()))
            .collect();
        entries.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        entries
    }
}

impl Default for FormatResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for resolvers with custom entries
#[derive(Clone, Debug, Default)]
pub struct FormatResolverBuilder {
    entries: Vec<FormatEntry>,
}

impl FormatResolverBuilder {
    /// Builder seeded with the built-in formats
    pub fn new() -> Self {
        Self {
            entries: FormatKind::all().into_iter().map(FormatEntry::from).collect(),
        }
    }

    /// Builder with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stage an entry
    pub fn with_entry(mut self, identifier: impl Into<String>, output: impl Into<String>) -> Self {
        self.entries.push(FormatEntry::new(identifier, output));
        self
    }

    /// Stage several entries
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = FormatEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Validate staged entries and build the resolver
    pub fn build(self) -> Result<FormatResolver, ResolverError> {
        let mut entries = HashMap::with_capacity(self.entries.len());

        for entry in self.entries {
            if entry.identifier.is_empty() {
                return Err(ResolverError::EmptyIdentifier);
            }
            // Empty output is reserved for unknown identifiers
            if entry.output.is_empty() {
                return Err(ResolverError::EmptyOutput(entry.identifier));
            }
            if entries.contains_key(&entry.identifier) {
                return Err(ResolverError::DuplicateIdentifier(entry.identifier));
            }

            if !entry.is_builtin() {
                debug!("Registering format '{}'", entry.identifier);
            }
            entries.insert(entry.identifier, entry.output);
        }

        Ok(FormatResolver { entries })
    }
}
