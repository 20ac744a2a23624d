//! Rule trait for defining convention rules.

use thiserror::Error;

use crate::fact::{Fact, FactKind};
use crate::types::{FixTarget, Severity};

/// Where a finding should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindingScope {
    /// At the location of the fact.
    #[default]
    Fact,
    /// At the file containing the fact. Identical file-level findings from
    /// several facts collapse into one diagnostic.
    File,
}

/// A convention violation detected by a rule, before severity and
/// location are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Human-readable message.
    pub message: String,
    /// Suggested replacement text for the offending identifier.
    pub fix: Option<String>,
    /// Identifier the fix rewrites.
    pub target: FixTarget,
    /// Where the finding is reported.
    pub scope: FindingScope,
}

impl Finding {
    /// Creates a finding without a suggested fix.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fix: None,
            target: FixTarget::Name,
            scope: FindingScope::Fact,
        }
    }

    /// Attaches suggested replacement text.
    #[must_use]
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Sets the identifier the fix rewrites (the declared name by default).
    #[must_use]
    pub fn targeting(mut self, target: FixTarget) -> Self {
        self.target = target;
        self
    }

    /// Reports the finding against the whole file.
    #[must_use]
    pub fn file_scoped(mut self) -> Self {
        self.scope = FindingScope::File;
        self
    }
}

/// Outcome of checking one fact against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The fact satisfies the convention.
    Pass,
    /// The fact violates the convention.
    Violation(Finding),
}

impl Verdict {
    /// Returns true if the fact satisfied the rule.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<Option<Finding>> for Verdict {
    fn from(finding: Option<Finding>) -> Self {
        finding.map_or(Self::Pass, Self::Violation)
    }
}

/// Internal failure of a rule while checking a fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule received a fact of a kind it does not handle.
    #[error("expected a {expected} fact, got {actual}")]
    UnexpectedFact {
        /// Kind the rule handles.
        expected: FactKind,
        /// Kind it received.
        actual: FactKind,
    },

    /// The fact is well-formed but the rule cannot evaluate it.
    #[error("{0}")]
    Malformed(String),
}

impl RuleError {
    /// Creates an [`RuleError::UnexpectedFact`] for the given fact.
    #[must_use]
    pub fn unexpected(expected: FactKind, fact: &Fact) -> Self {
        Self::UnexpectedFact {
            expected,
            actual: fact.kind(),
        }
    }
}

/// A convention rule over one kind of fact.
///
/// Rules are pure: the verdict depends only on the fact passed in, and rules
/// never hold cross-fact state. Conventions that relate two facts (pivot
/// tables, foreign keys) operate on composite facts produced by
/// [`join_composites`](crate::join_composites).
///
/// # Example
///
/// ```ignore
/// use convention_lint_core::{Fact, FactKind, Finding, Rule, RuleError, Verdict};
/// use convention_lint_core::utils::is_kebab_case;
///
/// pub struct CommandNameKebabCase;
///
/// impl Rule for CommandNameKebabCase {
///     fn id(&self) -> &'static str { "command-name-kebab-case" }
///     fn code(&self) -> &'static str { "CL070" }
///     fn applies_to(&self) -> FactKind { FactKind::Command }
///
///     fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
///         let command = fact
///             .as_command()
///             .ok_or_else(|| RuleError::unexpected(FactKind::Command, fact))?;
///         if is_kebab_case(command.name()) {
///             Ok(Verdict::Pass)
///         } else {
///             Ok(Verdict::Violation(Finding::new("Command names must be kebab-case")))
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the unique kebab-case id of this rule (e.g., "controller-name").
    fn id(&self) -> &'static str;

    /// Returns the rule code (e.g., "CL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the fact kind this rule applies to.
    fn applies_to(&self) -> FactKind;

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single fact.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] if the rule cannot evaluate the fact. The
    /// evaluator turns it into an `internal` diagnostic.
    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::CommandDecl;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn applies_to(&self) -> FactKind {
            FactKind::Command
        }

        fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
            let command = fact
                .as_command()
                .ok_or_else(|| RuleError::unexpected(FactKind::Command, fact))?;
            Ok((command.name() != "ok").then(|| Finding::new("not ok")).into())
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.id(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn verdict_from_option() {
        let fact = Fact::new(
            Location::new("routes/console.php", 1, 1),
            CommandDecl::new("ok").expect("valid command"),
        );
        assert!(TestRule.check(&fact).expect("check succeeds").is_pass());
    }

    #[test]
    fn finding_builders() {
        let finding = Finding::new("msg").with_fix("fixed").file_scoped();
        assert_eq!(finding.fix.as_deref(), Some("fixed"));
        assert_eq!(finding.target, FixTarget::Name);
        assert_eq!(finding.scope, FindingScope::File);

        let finding = Finding::new("msg").with_fix("a.php").targeting(FixTarget::FileName);
        assert_eq!(finding.target, FixTarget::FileName);
    }
}
