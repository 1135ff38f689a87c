//! Registry construction errors

use thiserror::Error;

/// Errors raised while building a resolver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Duplicate format identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Format identifier must not be empty")]
    EmptyIdentifier,

    #[error("Format '{0}' has an empty output")]
    EmptyOutput(String),
}
