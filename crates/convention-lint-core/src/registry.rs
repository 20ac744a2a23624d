//! Rule registry: the set of rules a run evaluates, grouped by fact kind.

use std::collections::HashMap;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::fact::FactKind;
use crate::rule::{Rule, RuleBox};
use crate::types::Severity;

/// Errors raised while building or configuring a registry.
///
/// These are startup errors: a run never starts with a half-configured
/// registry.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    /// Two rules share the same id.
    #[error("duplicate rule id `{0}`")]
    #[diagnostic(
        code(convention_lint::duplicate_rule_id),
        help("rule ids must be unique across all registered rules")
    )]
    DuplicateRuleId(String),

    /// A rule id is not registered.
    #[error("unknown rule `{0}`")]
    #[diagnostic(
        code(convention_lint::unknown_rule),
        help("run `convention-lint list-rules` to see the available rule ids")
    )]
    UnknownRule(String),
}

/// A rule together with its run configuration.
pub struct RegisteredRule {
    rule: RuleBox,
    enabled: bool,
    severity: Severity,
    priority: usize,
}

impl RegisteredRule {
    /// The rule itself.
    #[must_use]
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Whether the rule takes part in evaluation.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Effective severity (default or overridden).
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Registration index; lower registers first and wins ties.
    #[must_use]
    pub fn priority(&self) -> usize {
        self.priority
    }
}

impl std::fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("id", &self.rule.id())
            .field("enabled", &self.enabled)
            .field("severity", &self.severity)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Holds all rules of a run, grouped by the fact kind they apply to.
///
/// Insertion order is preserved per kind and doubles as rule priority. The
/// registry is configured with `&mut` methods at startup and then handed to
/// an [`Evaluator`](crate::Evaluator), which shares it immutably across
/// workers.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
    index: HashMap<&'static str, usize>,
    by_kind: HashMap<FactKind, Vec<usize>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from boxed rules, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRuleId`] if two rules share an id.
    pub fn from_rules(rules: impl IntoIterator<Item = RuleBox>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.register_box(rule)?;
        }
        Ok(registry)
    }

    /// Registers a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRuleId`] if the id is taken.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) -> Result<(), RegistryError> {
        self.register_box(Box::new(rule))
    }

    /// Registers a boxed rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRuleId`] if the id is taken.
    pub fn register_box(&mut self, rule: RuleBox) -> Result<(), RegistryError> {
        let id = rule.id();
        if self.index.contains_key(id) {
            return Err(RegistryError::DuplicateRuleId(id.to_string()));
        }

        let priority = self.rules.len();
        self.index.insert(id, priority);
        self.by_kind
            .entry(rule.applies_to())
            .or_default()
            .push(priority);
        self.rules.push(RegisteredRule {
            severity: rule.default_severity(),
            rule,
            enabled: true,
            priority,
        });
        Ok(())
    }

    /// Returns the enabled rules for a fact kind, in insertion order.
    ///
    /// Returns an empty list when no rule applies to the kind.
    #[must_use]
    pub fn rules_for(&self, kind: FactKind) -> Vec<&RegisteredRule> {
        self.by_kind
            .get(&kind)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| &self.rules[i])
                    .filter(|r| r.enabled)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Enables a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRule`] for unregistered ids.
    pub fn enable(&mut self, id: &str) -> Result<(), RegistryError> {
        self.get_mut(id)?.enabled = true;
        Ok(())
    }

    /// Disables a rule without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRule`] for unregistered ids.
    pub fn disable(&mut self, id: &str) -> Result<(), RegistryError> {
        self.get_mut(id)?.enabled = false;
        Ok(())
    }

    /// Overrides the severity of a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRule`] for unregistered ids.
    pub fn set_severity(&mut self, id: &str, severity: Severity) -> Result<(), RegistryError> {
        self.get_mut(id)?.severity = severity;
        Ok(())
    }

    /// Applies the `[rules.<id>]` overlay of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRule`] if the configuration names a
    /// rule that is not registered.
    pub fn apply_config(&mut self, config: &Config) -> Result<(), RegistryError> {
        for (id, rule_config) in &config.rules {
            let entry = self.get_mut(id)?;
            if let Some(enabled) = rule_config.enabled {
                entry.enabled = enabled;
                if !enabled {
                    debug!("Rule disabled by config: {}", id);
                }
            }
            if let Some(severity) = rule_config.severity {
                entry.severity = severity;
            }
        }
        Ok(())
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegisteredRule> {
        self.index.get(id).map(|&i| &self.rules[i])
    }

    /// Iterates over all registered rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRule> {
        self.rules.iter()
    }

    /// Number of registered rules (enabled or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of enabled rules.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|r| r.enabled).count()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut RegisteredRule, RegistryError> {
        let index = *self
            .index
            .get(id)
            .ok_or_else(|| RegistryError::UnknownRule(id.to_string()))?;
        Ok(&mut self.rules[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::Fact;
    use crate::rule::{RuleError, Verdict};

    struct StubRule {
        id: &'static str,
        kind: FactKind,
    }

    impl Rule for StubRule {
        fn id(&self) -> &'static str {
            self.id
        }
        fn code(&self) -> &'static str {
            "STUB"
        }
        fn applies_to(&self) -> FactKind {
            self.kind
        }
        fn check(&self, _fact: &Fact) -> Result<Verdict, RuleError> {
            Ok(Verdict::Pass)
        }
    }

    fn registry() -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        registry
            .register(StubRule {
                id: "b-route",
                kind: FactKind::Route,
            })
            .unwrap();
        registry
            .register(StubRule {
                id: "a-route",
                kind: FactKind::Route,
            })
            .unwrap();
        registry
            .register(StubRule {
                id: "class",
                kind: FactKind::Class,
            })
            .unwrap();
        registry
    }

    fn ids(rules: &[&RegisteredRule]) -> Vec<&'static str> {
        rules.iter().map(|r| r.rule().id()).collect()
    }

    #[test]
    fn rules_for_keeps_insertion_order() {
        let registry = registry();
        assert_eq!(ids(&registry.rules_for(FactKind::Route)), vec!["b-route", "a-route"]);
        assert_eq!(registry.rules_for(FactKind::Route)[1].priority(), 1);
        assert!(registry.rules_for(FactKind::View).is_empty());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = registry();
        let err = registry
            .register(StubRule {
                id: "class",
                kind: FactKind::Method,
            })
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRuleId(id) if id == "class"));
        assert_eq!(registry.len(), 3);
        assert!(registry.rules_for(FactKind::Method).is_empty());
    }

    #[test]
    fn disable_and_enable_toggle_without_removing() {
        let mut registry = registry();
        registry.disable("b-route").unwrap();
        assert_eq!(ids(&registry.rules_for(FactKind::Route)), vec!["a-route"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.enabled_count(), 2);

        registry.enable("b-route").unwrap();
        assert_eq!(ids(&registry.rules_for(FactKind::Route)), vec!["b-route", "a-route"]);
    }

    #[test]
    fn unknown_ids_fail() {
        let mut registry = registry();
        assert!(matches!(
            registry.disable("nope"),
            Err(RegistryError::UnknownRule(id)) if id == "nope"
        ));
        assert!(registry.enable("nope").is_err());
        assert!(registry.set_severity("nope", Severity::Info).is_err());
    }

    #[test]
    fn apply_config_overlays_rules() {
        let mut registry = registry();
        let config = Config::parse(
            r#"
[rules.a-route]
enabled = false

[rules.class]
severity = "error"
"#,
        )
        .unwrap();

        registry.apply_config(&config).unwrap();
        assert!(!registry.get("a-route").unwrap().is_enabled());
        assert_eq!(registry.get("class").unwrap().severity(), Severity::Error);
        assert_eq!(registry.get("b-route").unwrap().severity(), Severity::Warning);
    }

    #[test]
    fn apply_config_rejects_unknown_rule() {
        let mut registry = registry();
        let config = Config::parse("[rules.ghost]\nenabled = false\n").unwrap();
        assert!(matches!(
            registry.apply_config(&config),
            Err(RegistryError::UnknownRule(id)) if id == "ghost"
        ));
    }
}
