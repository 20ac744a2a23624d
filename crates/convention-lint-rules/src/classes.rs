//! Class naming rules: controllers, models, other class kinds, and the
//! class/file name pairing.
//!
//! # Good Patterns
//!
//! ```text
//! class ArticleController    // singular resource + `Controller`
//! class User                 // singular model
//! class Sluggable            // trait without `Trait` suffix
//! ```
//!
//! # Bad Patterns
//!
//! ```text
//! class ArticlesController   // plural resource
//! class Users                // plural model
//! interface PaymentInterface // redundant `Interface` suffix
//! ```

use convention_lint_core::utils::{is_pascal_case, singular_pascal, to_pascal_case};
use convention_lint_core::{
    ClassDecl, ClassKind, Fact, FactKind, Finding, FixTarget, Rule, RuleError, Severity, Verdict,
};

fn class_of(fact: &Fact) -> Result<&ClassDecl, RuleError> {
    fact.as_class()
        .ok_or_else(|| RuleError::unexpected(FactKind::Class, fact))
}

/// Controller names are a singular `PascalCase` noun plus the `Controller`
/// suffix.
#[derive(Debug, Clone)]
pub struct ControllerName {
    /// Required suffix.
    pub suffix: String,
}

impl Default for ControllerName {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerName {
    /// Rule code.
    pub const CODE: &'static str = "CL001";
    /// Rule id.
    pub const NAME: &'static str = "controller-name";

    /// Creates the rule with the `Controller` suffix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suffix: "Controller".to_string(),
        }
    }

    /// Sets the required suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl Rule for ControllerName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Controller names are a singular PascalCase noun plus `Controller`"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Class
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let class = class_of(fact)?;
        if class.kind() != ClassKind::Controller {
            return Ok(Verdict::Pass);
        }

        let name = class.name();
        let suffix = self.suffix.as_str();
        let Some(stem) = name.strip_suffix(suffix) else {
            let expected = format!("{}{suffix}", singular_pascal(name));
            return Ok(Verdict::Violation(
                Finding::new(format!(
                    "Controller names must end with `{suffix}`: expected `{expected}`"
                ))
                .with_fix(expected),
            ));
        };

        if stem.is_empty() {
            return Ok(Verdict::Violation(Finding::new(format!(
                "Controller names must start with a resource noun before `{suffix}`"
            ))));
        }

        let expected = format!("{}{suffix}", singular_pascal(stem));
        if expected == name {
            return Ok(Verdict::Pass);
        }

        let problem = if is_pascal_case(stem) {
            "singular"
        } else {
            "PascalCase"
        };
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Controller names must be {problem}: expected `{expected}`"
            ))
            .with_fix(expected),
        ))
    }
}

/// Model names are a singular `PascalCase` noun.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelName;

impl ModelName {
    /// Rule code.
    pub const CODE: &'static str = "CL002";
    /// Rule id.
    pub const NAME: &'static str = "model-name";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModelName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Model names are a singular PascalCase noun"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Class
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let class = class_of(fact)?;
        if class.kind() != ClassKind::Model {
            return Ok(Verdict::Pass);
        }

        let name = class.name();
        let expected = singular_pascal(name);
        if expected == name {
            return Ok(Verdict::Pass);
        }
        if expected.is_empty() {
            return Ok(Verdict::Violation(Finding::new(
                "Model names must be a singular PascalCase noun",
            )));
        }

        let problem = if is_pascal_case(name) {
            "singular"
        } else {
            "PascalCase"
        };
        Ok(Verdict::Violation(
            Finding::new(format!("Model names must be {problem}: expected `{expected}`"))
                .with_fix(expected),
        ))
    }
}

/// Classes other than controllers and models are `PascalCase`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassPascalCase;

impl ClassPascalCase {
    /// Rule code.
    pub const CODE: &'static str = "CL003";
    /// Rule id.
    pub const NAME: &'static str = "class-pascal-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClassPascalCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Class, interface and trait names are PascalCase"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Class
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let class = class_of(fact)?;
        // Controllers and models have their own, stricter rules.
        if matches!(class.kind(), ClassKind::Controller | ClassKind::Model)
            || is_pascal_case(class.name())
        {
            return Ok(Verdict::Pass);
        }

        let expected = to_pascal_case(class.name());
        Ok(Verdict::Violation(
            Finding::new(format!("Class names must be PascalCase: expected `{expected}`"))
                .with_fix(expected),
        ))
    }
}

/// The declaring file is named after the class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassFileName;

impl ClassFileName {
    /// Rule code.
    pub const CODE: &'static str = "CL004";
    /// Rule id.
    pub const NAME: &'static str = "class-file-name";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClassFileName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Class files are named exactly after the class they declare"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Class
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let class = class_of(fact)?;
        let Some(file_name) = class.file_name() else {
            return Ok(Verdict::Pass);
        };

        let base = file_name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file_name);
        let (stem, extension) = base.split_once('.').unwrap_or((base, ""));
        if stem == class.name() {
            return Ok(Verdict::Pass);
        }

        let expected = if extension.is_empty() {
            class.name().to_string()
        } else {
            format!("{}.{extension}", class.name())
        };
        Ok(Verdict::Violation(
            Finding::new(format!(
                "File `{base}` must be named after class `{}`: expected `{expected}`",
                class.name()
            ))
            .with_fix(expected)
            .targeting(FixTarget::FileName),
        ))
    }
}

/// Contracts are not suffixed `Interface`, traits are not suffixed `Trait`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTypeSuffix;

impl NoTypeSuffix {
    /// Rule code.
    pub const CODE: &'static str = "CL005";
    /// Rule id.
    pub const NAME: &'static str = "no-type-suffix";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoTypeSuffix {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Interfaces and traits do not repeat their kind as a name suffix"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Class
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let class = class_of(fact)?;
        let (suffix, kind) = match class.kind() {
            ClassKind::Contract => ("Interface", "Interface"),
            ClassKind::Trait => ("Trait", "Trait"),
            _ => return Ok(Verdict::Pass),
        };

        match class.name().strip_suffix(suffix) {
            Some(stem) if !stem.is_empty() => Ok(Verdict::Violation(
                Finding::new(format!(
                    "{kind} names must not be suffixed with `{suffix}`: expected `{stem}`"
                ))
                .with_fix(stem),
            )),
            _ => Ok(Verdict::Pass),
        }
    }
}
