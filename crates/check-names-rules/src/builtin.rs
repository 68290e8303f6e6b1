//! The built-in rule table.

use check_names_core::EntityKind;

use crate::pattern::Selector;

/// Static description of a pattern rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Rule code.
    pub code: &'static str,
    /// Kebab-case rule name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Declarations the rule governs.
    pub selector: Selector,
    /// Kind violations are reported under.
    pub reported_kind: EntityKind,
    /// Default pattern; must match the whole name.
    pub pattern: &'static str,
}

/// PascalCase with optional runs of three or more capitals.
const PASCAL_CASE: &str = r"^(([A-Z]{3,})?[A-Z][a-z]+)+([A-Z]{3,})?$";

/// CN001.
pub static CONST_CASE: RuleSpec = RuleSpec {
    code: "CN001",
    name: "const-case",
    description: "Constants are k followed by PascalCase words",
    selector: Selector::Constant,
    reported_kind: EntityKind::Constant,
    pattern: r"^k([A-Z]+[a-z]+)+$",
};

/// CN002.
pub static PRIVATE_MEMBER_CASE: RuleSpec = RuleSpec {
    code: "CN002",
    name: "private-member-case",
    description: "Non-public members are one or two lowercase words, each followed by _",
    selector: Selector::PrivateMember,
    reported_kind: EntityKind::Field,
    pattern: r"^([a-z]+_[a-z]+_|[a-z]+_)$",
};

/// CN003.
pub static SNAKE_CASE: RuleSpec = RuleSpec {
    code: "CN003",
    name: "snake-case",
    description: "Variables and public fields are snake_case",
    selector: Selector::Member,
    reported_kind: EntityKind::Variable,
    pattern: r"^[a-z]+(_[a-z]+)*$",
};

/// CN004.
pub static FUNCTION_CASE: RuleSpec = RuleSpec {
    code: "CN004",
    name: "function-case",
    description: "Functions are PascalCase",
    selector: Selector::Function,
    reported_kind: EntityKind::Function,
    pattern: PASCAL_CASE,
};

/// CN005.
pub static TYPE_CASE: RuleSpec = RuleSpec {
    code: "CN005",
    name: "type-case",
    description: "Types are PascalCase",
    selector: Selector::Type,
    reported_kind: EntityKind::Type,
    pattern: PASCAL_CASE,
};

/// All built-in rules in precedence order.
pub static BUILTIN_RULES: [&RuleSpec; 5] = [
    &CONST_CASE,
    &PRIVATE_MEMBER_CASE,
    &SNAKE_CASE,
    &FUNCTION_CASE,
    &TYPE_CASE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternRule;
    use check_names_core::NamingRule;

    fn rule(spec: &'static RuleSpec) -> PatternRule {
        PatternRule::new(spec).expect("built-in pattern compiles")
    }

    #[test]
    fn all_builtin_patterns_compile() {
        for spec in BUILTIN_RULES {
            assert!(PatternRule::new(spec).is_ok(), "{}", spec.name);
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = BUILTIN_RULES.iter().map(|s| s.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), BUILTIN_RULES.len());
    }

    #[test]
    fn const_case() {
        let r = rule(&CONST_CASE);
        for name in ["kMaxRetryCount", "kHTTPStatus", "kValue"] {
            assert!(r.accepts(name), "{name}");
        }
        for name in ["kmaxRetries", "MAX_COUNT", "k", "kA", "kMAX", "maxCount", "kMax_Count"] {
            assert!(!r.accepts(name), "{name}");
        }
    }

    #[test]
    fn private_member_case() {
        let r = rule(&PRIVATE_MEMBER_CASE);
        for name in ["count_", "max_size_"] {
            assert!(r.accepts(name), "{name}");
        }
        for name in ["Count_", "count", "Count", "max_size", "a_b_c_", "_count_"] {
            assert!(!r.accepts(name), "{name}");
        }
    }

    #[test]
    fn snake_case() {
        let r = rule(&SNAKE_CASE);
        for name in ["count", "retry_count", "max_http_count"] {
            assert!(r.accepts(name), "{name}");
        }
        for name in ["Count", "retryCount", "_count", "count_", "retry__count", "v2"] {
            assert!(!r.accepts(name), "{name}");
        }
    }

    #[test]
    fn pascal_case() {
        for spec in [&FUNCTION_CASE, &TYPE_CASE] {
            let r = rule(spec);
            for name in ["Parse", "ParseTree", "HTTPServer", "ParseHTTP", "GetHTTPResponse"] {
                assert!(r.accepts(name), "{name}");
            }
            for name in ["parse", "HTTP", "ParseHT", "HTServer", "Parse_Tree", "P"] {
                assert!(!r.accepts(name), "{name}");
            }
        }
    }
}
