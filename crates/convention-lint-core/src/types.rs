//! Core types for diagnostics and reports.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// Severity level for diagnostics.
///
/// Ordered so that `Info < Warning < Error < Internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail the run.
    Info,
    /// Convention drift that should be addressed.
    Warning,
    /// Convention violation that must be fixed.
    Error,
    /// A rule failed to evaluate a fact.
    Internal,
}

impl Severity {
    /// Parses a severity name (`info`, `warning`, `error`, `internal`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "warning" | "warn" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "internal" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Source location of a fact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed, `0` for the whole file).
    pub line: usize,
    /// Column number (1-indexed, `0` when unknown).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a location that refers to a whole file.
    #[must_use]
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0, 0)
    }

    /// Returns the whole-file location for this location's file.
    #[must_use]
    pub fn to_file(&self) -> Self {
        Self::file(self.file.clone())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A suggested fix for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Optional automatic replacement.
    pub replacement: Option<Replacement>,
}

impl Suggestion {
    /// Creates a new suggestion without automatic fix.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// Creates a new suggestion with automatic fix.
    #[must_use]
    pub fn with_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
        }
    }
}

/// Which identifier of a fact a replacement rewrites.
///
/// A single fact can carry several independent identifiers (a route has a
/// path and a name, a class has a name and a file). Fixes only conflict when
/// they rewrite the same one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FixTarget {
    /// The declared name (class, method, route name, table, column, ...).
    #[default]
    Name,
    /// A route URL path, placeholders included.
    Path,
    /// The file holding the fact.
    FileName,
    /// A configuration key.
    Key,
}

impl std::fmt::Display for FixTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Path => write!(f, "path"),
            Self::FileName => write!(f, "file-name"),
            Self::Key => write!(f, "key"),
        }
    }
}

/// A replacement for one identifier found at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Location of the fact holding the identifier.
    pub location: Location,
    /// The identifier being replaced.
    #[serde(default)]
    pub target: FixTarget,
    /// New text to insert.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(location: Location, target: FixTarget, new_text: impl Into<String>) -> Self {
        Self {
            location,
            target,
            new_text: new_text.into(),
        }
    }
}

/// A single reported convention violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule id (e.g., "controller-name").
    pub rule_id: String,
    /// Rule code (e.g., "CL001").
    pub code: String,
    /// Effective severity of this diagnostic.
    pub severity: Severity,
    /// Location of the offending fact.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Registration index of the producing rule (lower wins fix conflicts).
    #[serde(default)]
    pub priority: usize,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        code: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            code: code.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
            priority: 0,
        }
    }

    /// Adds a suggestion to this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Sets the rule priority used for fix conflict resolution.
    #[must_use]
    pub fn with_priority(mut self, priority: usize) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the replacement text suggested for this diagnostic, if any.
    #[must_use]
    pub fn fix_text(&self) -> Option<&str> {
        self.suggestion
            .as_ref()
            .and_then(|s| s.replacement.as_ref())
            .map(|r| r.new_text.as_str())
    }

    /// Total order used for report output: file, line, column, rule id,
    /// message, then every remaining field.
    ///
    /// Two diagnostics compare equal only when they are equal, so sorting
    /// followed by `dedup` removes every duplicate.
    #[must_use]
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.location
            .file
            .cmp(&other.location.file)
            .then(self.location.line.cmp(&other.location.line))
            .then(self.location.column.cmp(&other.location.column))
            .then_with(|| self.rule_id.cmp(&other.rule_id))
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.code.cmp(&other.code))
            .then(self.severity.cmp(&other.severity))
            .then(self.priority.cmp(&other.priority))
            .then_with(|| suggestion_key(self).cmp(&suggestion_key(other)))
    }
}

type SuggestionKey<'a> = Option<(&'a str, Option<(&'a Location, FixTarget, &'a str)>)>;

fn suggestion_key(diagnostic: &Diagnostic) -> SuggestionKey<'_> {
    diagnostic.suggestion.as_ref().map(|s| {
        (
            s.message.as_str(),
            s.replacement
                .as_ref()
                .map(|r| (&r.location, r.target, r.new_text.as_str())),
        )
    })
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

/// Ordered collection of diagnostics produced by one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of facts evaluated.
    pub facts_checked: usize,
}

impl Report {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns the diagnostics in report order without modifying the report.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut sorted: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        sorted.sort_by(|a, b| a.report_order(b));
        sorted
    }

    /// Sorts diagnostics into report order and drops exact duplicates.
    pub fn finalize(&mut self) {
        self.diagnostics.sort_by(Diagnostic::report_order);
        self.diagnostics.dedup();
    }

    /// Returns true if any diagnostic is at `error` severity or above.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_diagnostics_at(Severity::Error)
    }

    /// Checks if any diagnostic meets or exceeds the given severity threshold.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Returns diagnostics produced by the given rule.
    #[must_use]
    pub fn by_rule(&self, rule_id: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.rule_id == rule_id)
            .collect()
    }

    /// Counts diagnostics as `(internal, errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize, usize) {
        let count = |severity: Severity| {
            self.diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        (
            count(Severity::Internal),
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Returns true if the report has no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Merges diagnostics from another report.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.facts_checked += other.facts_checked;
    }
}
