//! Core types for declarations and findings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kind of a declared entity.
///
/// Also used as the kind a naming rule reports under, which is not always
/// the kind of the declaration itself (a private variable reports as a field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Free or public member variable.
    Variable,
    /// Class or struct data member.
    Field,
    /// Const-qualified or compile-time constant variable.
    #[serde(alias = "const")]
    Constant,
    /// Free function or method.
    Function,
    /// Class, struct, enum, type alias or typedef.
    Type,
}

impl EntityKind {
    /// Returns `true` for the kinds that hold data (variables and fields).
    #[must_use]
    pub fn is_data(self) -> bool {
        matches!(self, Self::Variable | Self::Field)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Variable => "variable",
            Self::Field => "field",
            Self::Constant => "const",
            Self::Function => "function",
            Self::Type => "type",
        })
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File the entity is declared in.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Qualifiers attached to a declaration by the front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Qualifiers {
    /// Const-qualified or constexpr (variables and fields).
    #[serde(default)]
    pub is_const: bool,
    /// Non-public class member (variables and fields).
    #[serde(default)]
    pub is_private: bool,
    /// Templated declaration (functions).
    #[serde(default)]
    pub is_template: bool,
    /// Program entry point (functions).
    #[serde(default)]
    pub is_entry_point: bool,
    /// Operator overload (functions).
    #[serde(default)]
    pub is_operator: bool,
}

/// A declaration record produced by a declaration provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDeclaration {
    /// Entity kind.
    pub kind: EntityKind,
    /// Raw identifier text.
    pub name: String,
    /// Where the entity is declared.
    #[serde(flatten)]
    pub location: Location,
    /// Translation unit the declaration was discovered from, if it differs
    /// from the declaring file (e.g. a header included by a source file).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<PathBuf>,
    /// Declaration qualifiers.
    #[serde(flatten)]
    pub qualifiers: Qualifiers,
}

impl SymbolDeclaration {
    /// Creates a declaration without qualifiers.
    #[must_use]
    pub fn new(kind: EntityKind, name: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            name: name.into(),
            location,
            unit: None,
            qualifiers: Qualifiers::default(),
        }
    }

    /// Sets the translation unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<PathBuf>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Marks the declaration as const-qualified.
    #[must_use]
    pub fn constant(mut self) -> Self {
        self.qualifiers.is_const = true;
        self
    }

    /// Marks the declaration as a non-public member.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.qualifiers.is_private = true;
        self
    }

    /// Marks the declaration as templated.
    #[must_use]
    pub fn template(mut self) -> Self {
        self.qualifiers.is_template = true;
        self
    }

    /// Marks the declaration as the program entry point.
    #[must_use]
    pub fn entry_point(mut self) -> Self {
        self.qualifiers.is_entry_point = true;
        self
    }

    /// Marks the declaration as an operator overload.
    #[must_use]
    pub fn operator(mut self) -> Self {
        self.qualifiers.is_operator = true;
        self
    }

    /// Path findings for this declaration are grouped under.
    #[must_use]
    pub fn group_key(&self) -> &Path {
        self.unit.as_deref().unwrap_or(&self.location.file)
    }

    /// The part of the name that naming rules are checked against.
    ///
    /// For templated functions this is the text before the first `<`.
    #[must_use]
    pub fn checked_name(&self) -> &str {
        if self.kind == EntityKind::Function && self.qualifiers.is_template {
            self.name
                .split_once('<')
                .map_or(self.name.as_str(), |(base, _)| base)
        } else {
            &self.name
        }
    }

    /// Returns `true` if the declaration is never reported: entry points,
    /// operator overloads and declarations without a name.
    #[must_use]
    pub fn is_exempt(&self) -> bool {
        self.name.is_empty()
            || (self.kind == EntityKind::Function
                && (self.qualifiers.is_entry_point || self.qualifiers.is_operator))
    }
}

/// A name that does not satisfy the rule selected for its declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingViolation {
    /// Code of the rule that rejected the name (e.g., "CN001").
    pub code: String,
    /// Name of the rule that rejected the name (e.g., "const-case").
    pub rule: String,
    /// Kind the violation is reported under.
    pub kind: EntityKind,
    /// Offending name.
    pub name: String,
    /// Where the entity is declared.
    pub location: Location,
}

impl NamingViolation {
    /// Creates a new naming violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        kind: EntityKind,
        name: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            kind,
            name: name.into(),
            location,
        }
    }
}

/// A sub-token of a name that is probably a misspelled dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellingMistake {
    /// Full name of the entity containing the token.
    pub entity_name: String,
    /// Sub-token that looks misspelled.
    pub wrong_token: String,
    /// Closest dictionary word.
    pub suggested_word: String,
    /// Edit distance between the token and the suggestion.
    pub distance: usize,
    /// Where the entity is declared.
    pub location: Location,
}

/// A single reportable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    /// Name breaks the naming rule for its kind.
    NamingViolation(NamingViolation),
    /// Name contains a probable misspelling.
    SpellingMistake(SpellingMistake),
}

impl Finding {
    /// Location of the declaration this finding is about.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::NamingViolation(v) => &v.location,
            Self::SpellingMistake(m) => &m.location,
        }
    }

    /// Returns `true` for naming violations.
    #[must_use]
    pub fn is_naming_violation(&self) -> bool {
        matches!(self, Self::NamingViolation(_))
    }

    /// Short tag for one-line output: the rule code, or `spelling`.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::NamingViolation(v) => &v.code,
            Self::SpellingMistake(_) => "spelling",
        }
    }

    /// Human-readable one-line message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NamingViolation(v) => format!(
                "name \"{}\" does not meet the requirements ({})",
                v.name, v.kind
            ),
            Self::SpellingMistake(m) => format!(
                "\"{}\" in \"{}\" may be a misspelling of \"{}\"",
                m.wrong_token, m.entity_name, m.suggested_word
            ),
        }
    }
}

impl From<NamingViolation> for Finding {
    fn from(v: NamingViolation) -> Self {
        Self::NamingViolation(v)
    }
}

impl From<SpellingMistake> for Finding {
    fn from(m: SpellingMistake) -> Self {
        Self::SpellingMistake(m)
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.location();
        write!(
            f,
            "{}:{}: [{}] {}",
            location.file.display(),
            location.line,
            self.tag(),
            self.message()
        )
    }
}
