//! Console command and validation rule naming.

use convention_lint_core::utils::{is_kebab_case, is_snake_case, to_kebab_case, to_snake_case};
use convention_lint_core::{Fact, FactKind, Finding, Rule, RuleError, Verdict};

/// Console command names are `kebab-case`; `:` separates namespaces
/// (`app:send-mail`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandNameKebabCase;

impl CommandNameKebabCase {
    /// Rule code.
    pub const CODE: &'static str = "CL070";
    /// Rule id.
    pub const NAME: &'static str = "command-name-kebab-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CommandNameKebabCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Console command names are kebab-case with `:` namespaces"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Command
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let name = fact
            .as_command()
            .ok_or_else(|| RuleError::unexpected(FactKind::Command, fact))?
            .name();
        if name.split(':').all(is_kebab_case) {
            return Ok(Verdict::Pass);
        }

        let expected = name
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(to_kebab_case)
            .collect::<Vec<_>>()
            .join(":");
        Ok(Verdict::Violation(
            Finding::new(format!("Command names must be kebab-case: expected `{expected}`"))
                .with_fix(expected),
        ))
    }
}

/// Custom validation rule identifiers are `snake_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRuleSnakeCase;

impl ValidationRuleSnakeCase {
    /// Rule code.
    pub const CODE: &'static str = "CL080";
    /// Rule id.
    pub const NAME: &'static str = "validation-rule-snake-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ValidationRuleSnakeCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Validation rule identifiers are snake_case"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::ValidationRule
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let identifier = fact
            .as_validation_rule()
            .ok_or_else(|| RuleError::unexpected(FactKind::ValidationRule, fact))?
            .identifier();
        if is_snake_case(identifier) {
            return Ok(Verdict::Pass);
        }

        let expected = to_snake_case(identifier);
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Validation rule identifiers must be snake_case: expected `{expected}`"
            ))
            .with_fix(expected),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::{CommandDecl, Location, ValidationRuleRef};

    fn at() -> Location {
        Location::new("app/Console/Kernel.php", 21, 9)
    }

    #[test]
    fn command_names() {
        let rule = CommandNameKebabCase::new();
        for name in ["app:send-mail", "inspire", "queue:retry-batch"] {
            let fact = Fact::new(at(), CommandDecl::new(name).unwrap());
            assert!(rule.check(&fact).unwrap().is_pass(), "{name}");
        }

        let fact = Fact::new(at(), CommandDecl::new("app:sendMail").unwrap());
        let Verdict::Violation(finding) = rule.check(&fact).unwrap() else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("app:send-mail"));
    }

    #[test]
    fn validation_rule_identifiers() {
        let rule = ValidationRuleSnakeCase::new();
        let ok = Fact::new(at(), ValidationRuleRef::new("uppercase_first").unwrap());
        assert!(rule.check(&ok).unwrap().is_pass());

        let bad = Fact::new(at(), ValidationRuleRef::new("UppercaseFirst").unwrap());
        let Verdict::Violation(finding) = rule.check(&bad).unwrap() else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("uppercase_first"));
    }
}
