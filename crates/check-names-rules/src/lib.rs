//! # check-names-rules
//!
//! Built-in naming rules for check-names.
//!
//! The rules are a table of regular expressions, one per family of
//! declarations. For every declaration the first row whose selector matches
//! is applied.
//!
//! ## Available Rules
//!
//! | Code | Name | Applies to | Convention |
//! |------|------|------------|------------|
//! | CN001 | `const-case` | const variables and fields | `k` + PascalCase (`kMaxRetryCount`) |
//! | CN002 | `private-member-case` | non-public members | lowercase with trailing `_` (`count_`, `max_size_`) |
//! | CN003 | `snake-case` | other variables and fields | snake_case (`retry_count`) |
//! | CN004 | `function-case` | functions | PascalCase, acronyms of 3+ capitals allowed (`ParseHTTPHeader`) |
//! | CN005 | `type-case` | classes, structs, enums, aliases | same as CN004 |
//!
//! ## Usage
//!
//! ```ignore
//! use check_names_core::Linter;
//! use check_names_rules::default_classifier;
//!
//! let linter = Linter::builder()
//!     .classifier(default_classifier()?)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builtin;
mod pattern;
mod presets;

pub use builtin::{RuleSpec, BUILTIN_RULES};
pub use pattern::{PatternError, PatternRule, Selector};
pub use presets::{classifier_from_config, default_classifier};

/// Re-export core types for convenience.
pub use check_names_core::{Classifier, EntityKind, NamingRule};
