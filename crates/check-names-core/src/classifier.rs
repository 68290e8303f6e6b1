//! Rule table that maps declarations to naming rules.

use crate::rule::{NamingRule, RuleBox};
use crate::types::{EntityKind, NamingViolation, SymbolDeclaration};

/// Name of the function that is never checked.
const UNCHECKED_FUNCTION: &str = "run";

/// Ordered table of naming rules.
///
/// For every declaration the first rule that selects it is applied; rule
/// order is therefore precedence (constants before private members before
/// other data members).
#[derive(Default)]
pub struct Classifier {
    rules: Vec<RuleBox>,
}

impl Classifier {
    /// Creates an empty table. An empty table accepts every declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule<R: NamingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns `true` if no rule is ever applied to the declaration.
    #[must_use]
    pub fn is_unchecked(decl: &SymbolDeclaration) -> bool {
        decl.is_exempt()
            || (decl.kind == EntityKind::Function && decl.checked_name() == UNCHECKED_FUNCTION)
    }

    /// Returns the rule governing a declaration, if any.
    #[must_use]
    pub fn select(&self, decl: &SymbolDeclaration) -> Option<&dyn NamingRule> {
        if Self::is_unchecked(decl) {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.selects(decl))
            .map(|rule| &**rule as &dyn NamingRule)
    }

    /// Classifies a declaration against its rule.
    ///
    /// # Errors
    ///
    /// Returns the [`NamingViolation`] produced by the selected rule.
    /// Exempt declarations and declarations no rule selects always pass.
    pub fn classify(&self, decl: &SymbolDeclaration) -> Result<(), NamingViolation> {
        match self.select(decl) {
            Some(rule) => rule.check(decl),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.code()))
            .finish()
    }
}
