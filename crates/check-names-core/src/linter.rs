//! Pipeline that runs declarations through the classifier and spell checker.

use crate::classifier::Classifier;
use crate::config::Config;
use crate::report::{Aggregator, ReportError, ReportSink};
use crate::rule::{NamingRule, RuleBox};
use crate::spelling::SpellChecker;
use crate::types::{Finding, SymbolDeclaration};

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Error emitting a report.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Glob pattern error.
    #[error("Invalid exclude pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Declarations checked.
    pub declarations: usize,
    /// Declarations skipped as exempt or excluded.
    pub skipped: usize,
    /// Naming violations found.
    pub naming_violations: usize,
    /// Spelling mistakes found.
    pub spelling_mistakes: usize,
}

impl RunStats {
    fn count(&mut self, finding: &Finding) {
        if finding.is_naming_violation() {
            self.naming_violations += 1;
        } else {
            self.spelling_mistakes += 1;
        }
    }
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    classifier: Classifier,
    spell_checker: Option<SpellChecker>,
    exclude_patterns: Vec<String>,
}

impl LinterBuilder {
    /// Creates a new builder with no rules and no spell checker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rule table.
    #[must_use]
    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Appends a rule to the table.
    #[must_use]
    pub fn rule<R: NamingRule + 'static>(mut self, rule: R) -> Self {
        self.classifier = self.classifier.rule(rule);
        self
    }

    /// Appends a boxed rule to the table.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.classifier = self.classifier.rule_box(rule);
        self
    }

    /// Sets the spell checker.
    #[must_use]
    pub fn spell_checker(mut self, spell_checker: SpellChecker) -> Self {
        self.spell_checker = Some(spell_checker);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds exclude patterns from configuration.
    #[must_use]
    pub fn config(mut self, config: &Config) -> Self {
        self.exclude_patterns
            .extend(config.analyzer.exclude.iter().cloned());
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Linter, LinterError> {
        let exclude = self
            .exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Linter {
            classifier: self.classifier,
            spell_checker: self.spell_checker,
            exclude,
        })
    }
}

/// Runs naming and spelling checks over a declaration stream.
///
/// Use [`Linter::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Linter {
    classifier: Classifier,
    spell_checker: Option<SpellChecker>,
    exclude: Vec<glob::Pattern>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the rule table.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.classifier.len()
    }

    /// Returns `true` if the declaration is not checked at all.
    #[must_use]
    pub fn is_skipped(&self, decl: &SymbolDeclaration) -> bool {
        decl.is_exempt() || self.is_excluded(decl)
    }

    fn is_excluded(&self, decl: &SymbolDeclaration) -> bool {
        let file = decl.location.file.to_string_lossy();
        self.exclude.iter().any(|p| p.matches(&file))
    }

    /// Checks one declaration.
    ///
    /// A name that breaks its rule yields the violation alone; a name that
    /// passes (or that no rule governs) is spell-checked when long enough.
    #[must_use]
    pub fn check(&self, decl: &SymbolDeclaration) -> Vec<Finding> {
        if Classifier::is_unchecked(decl) {
            return Vec::new();
        }

        if let Err(violation) = self.classifier.classify(decl) {
            return vec![violation.into()];
        }

        match &self.spell_checker {
            Some(spell) if spell.should_check(&decl.name) => spell
                .find_mistakes(&decl.name, &decl.location)
                .into_iter()
                .map(Finding::from)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Runs every declaration through the checks in order, recording
    /// findings into `aggregator`.
    ///
    /// The aggregator is not flushed at the end; call
    /// [`Aggregator::finish`] once the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be emitted.
    pub fn run<I, S>(
        &self,
        declarations: I,
        aggregator: &mut Aggregator<S>,
    ) -> Result<RunStats, LinterError>
    where
        I: IntoIterator<Item = SymbolDeclaration>,
        S: ReportSink,
    {
        let mut stats = RunStats::default();

        for decl in declarations {
            if self.is_skipped(&decl) {
                debug!("Skipping {} at {}", decl.name, decl.location.file.display());
                stats.skipped += 1;
                continue;
            }

            aggregator.observe(decl.group_key())?;
            stats.declarations += 1;

            for finding in self.check(&decl) {
                stats.count(&finding);
                aggregator.record(finding);
            }
        }

        info!(
            "Checked {} declarations: {} bad names, {} possible mistakes",
            stats.declarations, stats.naming_violations, stats.spelling_mistakes
        );

        Ok(stats)
    }
}
