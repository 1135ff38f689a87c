//! Format Resolver
//!
//! Maps format identifiers to a fixed representative output string.
//!
//! | identifier | output   |
//! |------------|----------|
//! | `json`     | `{}`     |
//! | `xml`      | `<xml/>` |
//! | `csv`      | `,`      |
//! | `yaml`     | `---`    |
//! | `text`     | `txt`    |
//!
//! Any other identifier resolves to the empty string. Matching is exact and
//! case-sensitive.
//!
//! ```
//! use format_resolver::{resolve, FormatResolver};
//!
//! assert_eq!(resolve("json"), "{}");
//! assert_eq!(resolve("pdf"), "");
//!
//! let resolver = FormatResolver::builder()
//!     .with_entry("toml", "+++")
//!     .build()
//!     .unwrap();
//! assert_eq!(resolver.lookup("toml"), Some("+++"));
//! assert_eq!(resolver.lookup("JSON"), None);
//! ```

pub mod config;
pub mod models;
pub mod output;
pub mod resolver;
pub mod utils;

pub use models::{FormatEntry, FormatKind, Resolution};
pub use resolver::{resolve, FormatResolver, FormatResolverBuilder, ResolverError};
