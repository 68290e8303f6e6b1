//! # check-names-core
//!
//! Core engine for naming-convention linting of extracted symbol declarations.
//!
//! This crate does not parse source code. It receives already-extracted
//! [`SymbolDeclaration`] records and provides:
//!
//! - [`NamingRule`] trait and the [`Classifier`] rule table
//! - [`tokenize`] for splitting identifiers into sub-words
//! - [`edit_distance`] and the dictionary-backed [`SpellChecker`]
//! - [`Aggregator`] for grouping findings per file and rendering reports
//! - [`Linter`] for driving a declaration stream through all of the above
//!
//! ## Example
//!
//! ```ignore
//! use check_names_core::{Aggregator, Dictionary, Linter, SpellChecker, TextSink};
//!
//! let linter = Linter::builder()
//!     .classifier(classifier)
//!     .spell_checker(SpellChecker::new(Dictionary::load_or_empty("words.txt")))
//!     .build()?;
//!
//! let mut aggregator = Aggregator::new(TextSink::new(std::io::stdout()));
//! linter.run(declarations, &mut aggregator)?;
//! aggregator.finish()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod config;
mod dictionary;
mod distance;
mod linter;
mod report;
mod rule;
mod spelling;
mod tokenizer;
mod types;

pub use classifier::Classifier;
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig, SpellingConfig};
pub use dictionary::{Dictionary, DictionaryError};
pub use distance::{edit_distance, edit_distance_within};
pub use linter::{Linter, LinterBuilder, LinterError, RunStats};
pub use report::{basename, Aggregator, FileReport, ReportError, ReportSink, TextSink};
pub use rule::{NamingRule, RuleBox};
pub use spelling::{Correction, SpellChecker};
pub use tokenizer::tokenize;
pub use types::{
    EntityKind, Finding, Location, NamingViolation, Qualifiers, SpellingMistake,
    SymbolDeclaration,
};
