//! Method naming rules.
//!
//! # Good Patterns
//!
//! ```text
//! public function showActive()        // camelCase
//! public function store()  // POST    // resource action routed by its verb
//! ```

use convention_lint_core::utils::{is_camel_case, to_camel_case};
use convention_lint_core::{
    ClassKind, Fact, FactKind, Finding, HttpVerb, MethodDecl, Rule, RuleError, Verdict,
};

fn method_of(fact: &Fact) -> Result<&MethodDecl, RuleError> {
    fact.as_method()
        .ok_or_else(|| RuleError::unexpected(FactKind::Method, fact))
}

/// Method names are `camelCase`.
///
/// Magic methods (`__construct`, `__get`, ...) are exempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodCamelCase;

impl MethodCamelCase {
    /// Rule code.
    pub const CODE: &'static str = "CL010";
    /// Rule id.
    pub const NAME: &'static str = "method-camel-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MethodCamelCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Method names are camelCase"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Method
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let name = method_of(fact)?.name();
        if name.starts_with("__") || is_camel_case(name) {
            return Ok(Verdict::Pass);
        }

        let expected = to_camel_case(name);
        Ok(Verdict::Violation(
            Finding::new(format!("Method names must be camelCase: expected `{expected}`"))
                .with_fix(expected),
        ))
    }
}

/// Resource controller actions and the verbs that may route to them.
const RESOURCE_ACTIONS: &[(&str, &[HttpVerb])] = &[
    ("index", &[HttpVerb::Get, HttpVerb::Head]),
    ("create", &[HttpVerb::Get, HttpVerb::Head]),
    ("store", &[HttpVerb::Post]),
    ("show", &[HttpVerb::Get, HttpVerb::Head]),
    ("edit", &[HttpVerb::Get, HttpVerb::Head]),
    ("update", &[HttpVerb::Put, HttpVerb::Patch]),
    ("destroy", &[HttpVerb::Delete]),
];

/// Resource actions on controllers are routed by their conventional verb
/// (`store` by POST, `update` by PUT/PATCH, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceActionVerb;

impl ResourceActionVerb {
    /// Rule code.
    pub const CODE: &'static str = "CL011";
    /// Rule id.
    pub const NAME: &'static str = "resource-action-verb";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ResourceActionVerb {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Resource controller actions are routed by their conventional HTTP verb"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Method
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let method = method_of(fact)?;
        if method.owner_kind() != ClassKind::Controller || method.verbs().is_empty() {
            return Ok(Verdict::Pass);
        }
        let Some((action, allowed)) = RESOURCE_ACTIONS
            .iter()
            .find(|(action, _)| *action == method.name())
        else {
            return Ok(Verdict::Pass);
        };

        let unexpected: Vec<String> = method
            .verbs()
            .iter()
            .filter(|verb| !allowed.contains(verb))
            .map(ToString::to_string)
            .collect();
        if unexpected.is_empty() {
            return Ok(Verdict::Pass);
        }

        let expected: Vec<String> = allowed.iter().map(ToString::to_string).collect();
        Ok(Verdict::Violation(Finding::new(format!(
            "Resource action `{action}` must be routed by {} (found {})",
            expected.join("/"),
            unexpected.join(", ")
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Location;

    fn method(name: &str, owner: ClassKind, verbs: &[HttpVerb]) -> Fact {
        Fact::new(
            Location::new("app/Http/Controllers/ArticleController.php", 12, 5),
            MethodDecl::new(name, owner, verbs.iter().copied()).unwrap(),
        )
    }

    #[test]
    fn camel_case_methods_pass() {
        let rule = MethodCamelCase::new();
        for name in ["index", "showActive", "__construct", "toArray"] {
            assert!(rule.check(&method(name, ClassKind::Other, &[])).unwrap().is_pass(), "{name}");
        }
    }

    #[test]
    fn snake_case_method_is_flagged() {
        let verdict = MethodCamelCase::new()
            .check(&method("show_active", ClassKind::Controller, &[]))
            .unwrap();
        let Verdict::Violation(finding) = verdict else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("showActive"));
    }

    #[test]
    fn resource_actions_need_their_verb() {
        let rule = ResourceActionVerb::new();
        assert!(rule
            .check(&method("store", ClassKind::Controller, &[HttpVerb::Post]))
            .unwrap()
            .is_pass());
        assert!(rule
            .check(&method("update", ClassKind::Controller, &[HttpVerb::Put, HttpVerb::Patch]))
            .unwrap()
            .is_pass());

        let verdict = rule
            .check(&method("store", ClassKind::Controller, &[HttpVerb::Get, HttpVerb::Post]))
            .unwrap();
        let Verdict::Violation(finding) = verdict else {
            panic!("expected a violation");
        };
        assert_eq!(
            finding.message,
            "Resource action `store` must be routed by POST (found GET)"
        );
    }

    #[test]
    fn non_resource_and_unrouted_methods_pass() {
        let rule = ResourceActionVerb::new();
        assert!(rule
            .check(&method("publish", ClassKind::Controller, &[HttpVerb::Get]))
            .unwrap()
            .is_pass());
        assert!(rule
            .check(&method("destroy", ClassKind::Controller, &[]))
            .unwrap()
            .is_pass());
        assert!(rule
            .check(&method("destroy", ClassKind::Model, &[HttpVerb::Get]))
            .unwrap()
            .is_pass());
    }
}
