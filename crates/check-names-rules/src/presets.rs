//! Rule tables assembled from the built-in rules.

use check_names_core::{Classifier, Config};
use tracing::debug;

use crate::builtin::BUILTIN_RULES;
use crate::pattern::{PatternError, PatternRule};

/// Returns the built-in rule table with default patterns.
///
/// # Errors
///
/// Returns an error if a built-in pattern fails to compile.
pub fn default_classifier() -> Result<Classifier, PatternError> {
    classifier_from_config(&Config::default())
}

/// Returns the built-in rule table with per-rule overrides applied.
///
/// Rules are looked up in `[rules.<name>]` or `[rules.<code>]`. Disabled
/// rules stay in the table so that the declarations they govern do not fall
/// through to a later rule.
///
/// # Errors
///
/// Returns an error if a configured pattern is not a valid regular
/// expression.
pub fn classifier_from_config(config: &Config) -> Result<Classifier, PatternError> {
    let mut classifier = Classifier::new();

    for spec in BUILTIN_RULES {
        let mut rule = PatternRule::new(spec)?;
        let pattern = config
            .rule_config(spec.name, spec.code)
            .and_then(|c| c.pattern.as_deref());
        if let Some(pattern) = pattern {
            debug!("Overriding pattern of {}: {}", spec.name, pattern);
            rule = rule.with_pattern(pattern)?;
        }
        if !config.is_rule_enabled(spec.name, spec.code) {
            debug!("Disabling rule: {}", spec.name);
            rule = rule.enabled(false);
        }
        classifier = classifier.rule(rule);
    }

    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_names_core::{EntityKind, Location, SymbolDeclaration};

    fn var(name: &str) -> SymbolDeclaration {
        SymbolDeclaration::new(EntityKind::Variable, name, Location::new("a.cpp", 1))
    }

    #[test]
    fn default_table_has_all_rules_in_order() {
        let classifier = default_classifier().unwrap();
        let codes: Vec<_> = classifier.rules().iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["CN001", "CN002", "CN003", "CN004", "CN005"]);
    }

    #[test]
    fn disabled_rule_still_claims_declarations() {
        let config = Config::parse("[rules.const-case]\nenabled = false\n").unwrap();
        let classifier = classifier_from_config(&config).unwrap();
        let decl = var("WHATEVER").constant();
        assert_eq!(classifier.select(&decl).unwrap().code(), "CN001");
        assert!(classifier.classify(&decl).is_ok());
    }

    #[test]
    fn pattern_override_by_code() {
        let config = Config::parse("[rules.CN003]\npattern = '^[a-z]+([A-Z][a-z]+)*$'\n").unwrap();
        let classifier = classifier_from_config(&config).unwrap();
        assert!(classifier.classify(&var("retryCount")).is_ok());
        assert!(classifier.classify(&var("retry_count")).is_err());
    }

    #[test]
    fn unanchored_override_matches_whole_name() {
        let config = Config::parse("[rules.const-case]\npattern = 'k([A-Z]+[a-z]+)+'\n").unwrap();
        let classifier = classifier_from_config(&config).unwrap();
        let constant = |name: &str| {
            SymbolDeclaration::new(EntityKind::Constant, name, Location::new("a.cpp", 1))
        };
        assert!(classifier.classify(&constant("kFooBar")).is_ok());
        assert!(classifier.classify(&constant("BAD_kFooBar_X")).is_err());
    }

    #[test]
    fn invalid_override_is_an_error() {
        let config = Config::parse("[rules.type-case]\npattern = '('\n").unwrap();
        let err = classifier_from_config(&config).unwrap_err();
        assert_eq!(err.rule, "type-case");
    }
}
