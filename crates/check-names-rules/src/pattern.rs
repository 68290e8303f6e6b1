//! Regex-backed naming rule.

use check_names_core::{EntityKind, NamingRule, SymbolDeclaration};
use regex::Regex;

use crate::builtin::RuleSpec;

/// Error compiling a rule pattern.
#[derive(Debug, thiserror::Error)]
#[error("Invalid pattern for rule {rule}: {source}")]
pub struct PatternError {
    /// Rule the pattern belongs to.
    pub rule: String,
    /// Underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// Which declarations a rule governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `Constant` declarations and const-qualified variables or fields.
    Constant,
    /// Non-public variables or fields.
    PrivateMember,
    /// Any variable or field.
    Member,
    /// Functions.
    Function,
    /// Types.
    Type,
}

impl Selector {
    /// Whether the selector matches a declaration.
    #[must_use]
    pub fn selects(self, decl: &SymbolDeclaration) -> bool {
        let q = &decl.qualifiers;
        match self {
            Self::Constant => {
                decl.kind == EntityKind::Constant || (decl.kind.is_data() && q.is_const)
            }
            Self::PrivateMember => decl.kind.is_data() && q.is_private,
            Self::Member => decl.kind.is_data(),
            Self::Function => decl.kind == EntityKind::Function,
            Self::Type => decl.kind == EntityKind::Type,
        }
    }
}

/// A naming rule whose convention is a regular expression.
#[derive(Debug, Clone)]
pub struct PatternRule {
    spec: &'static RuleSpec,
    source: String,
    pattern: Regex,
    enabled: bool,
}

impl PatternRule {
    /// Compiles the rule described by `spec`.
    ///
    /// Patterns must match the whole name; they are anchored when compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in pattern fails to compile.
    pub fn new(spec: &'static RuleSpec) -> Result<Self, PatternError> {
        Ok(Self {
            spec,
            source: spec.pattern.to_string(),
            pattern: compile(spec, spec.pattern)?,
            enabled: true,
        })
    }

    /// Replaces the pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, PatternError> {
        self.pattern = compile(self.spec, pattern)?;
        self.source = pattern.to_string();
        Ok(self)
    }

    /// Enables or disables the rule. A disabled rule accepts every name.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Returns the selector.
    #[must_use]
    pub fn selector(&self) -> Selector {
        self.spec.selector
    }

    /// Returns `true` if the rule is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

fn compile(spec: &RuleSpec, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| PatternError {
        rule: spec.name.to_string(),
        source,
    })
}

impl NamingRule for PatternRule {
    fn name(&self) -> &'static str {
        self.spec.name
    }

    fn code(&self) -> &'static str {
        self.spec.code
    }

    fn description(&self) -> &'static str {
        self.spec.description
    }

    fn reported_kind(&self) -> EntityKind {
        self.spec.reported_kind
    }

    fn selects(&self, decl: &SymbolDeclaration) -> bool {
        self.spec.selector.selects(decl)
    }

    fn accepts(&self, name: &str) -> bool {
        !self.enabled || self.pattern.is_match(name)
    }
}
