//! Rule trait for naming conventions.

use crate::types::{EntityKind, NamingViolation, SymbolDeclaration};

/// A naming convention for one family of declarations.
///
/// A rule has two halves: a selector deciding whether the rule governs a
/// declaration at all, and a predicate deciding whether a name is acceptable.
/// The [`Classifier`](crate::Classifier) asks each rule in turn and applies
/// the first one that selects the declaration.
///
/// # Example
///
/// ```ignore
/// use check_names_core::{EntityKind, NamingRule, SymbolDeclaration};
///
/// pub struct NoShortTypes;
///
/// impl NamingRule for NoShortTypes {
///     fn name(&self) -> &'static str { "no-short-types" }
///     fn code(&self) -> &'static str { "CN100" }
///     fn reported_kind(&self) -> EntityKind { EntityKind::Type }
///
///     fn selects(&self, decl: &SymbolDeclaration) -> bool {
///         decl.kind == EntityKind::Type
///     }
///
///     fn accepts(&self, name: &str) -> bool {
///         name.len() > 2
///     }
/// }
/// ```
pub trait NamingRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "const-case").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CN001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of the convention.
    fn description(&self) -> &'static str {
        ""
    }

    /// Kind that violations of this rule are reported under.
    fn reported_kind(&self) -> EntityKind;

    /// Whether this rule governs the given declaration.
    fn selects(&self, decl: &SymbolDeclaration) -> bool;

    /// Whether the name satisfies the convention.
    fn accepts(&self, name: &str) -> bool;

    /// Checks a declaration this rule selects.
    ///
    /// # Errors
    ///
    /// Returns a [`NamingViolation`] carrying the checked name when the
    /// convention is not met.
    fn check(&self, decl: &SymbolDeclaration) -> Result<(), NamingViolation> {
        let name = decl.checked_name();
        if self.accepts(name) {
            Ok(())
        } else {
            Err(NamingViolation::new(
                self.code(),
                self.name(),
                self.reported_kind(),
                name,
                decl.location.clone(),
            ))
        }
    }
}

/// Type alias for boxed `NamingRule` trait objects.
pub type RuleBox = Box<dyn NamingRule>;
