//! Format resolution module
//!
//! Maps format identifiers to their representative output.

mod error;
mod registry;

pub use error::ResolverError;
pub use registry::{resolve, FormatResolver, FormatResolverBuilder};
