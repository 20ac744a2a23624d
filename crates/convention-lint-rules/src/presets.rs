//! Rule presets and registry construction from configuration.

use convention_lint_core::{Config, RegistryError, RuleBox, RuleRegistry, Severity};
use tracing::debug;

use crate::{
    ClassFileName, ClassPascalCase, ColumnModelPrefix, ColumnSnakeCase, CommandNameKebabCase,
    ConfigFileKebabCase, ConfigKeySnakeCase, ControllerName, ForeignKeyName, MethodCamelCase,
    MigrationFileName, ModelName, NoTypeSuffix, PivotTableName, ResourceActionVerb,
    RouteLeadingSlash, RouteNameCamelCase, RouteParamCamelCase, RouteUrlKebabCase, TableName,
    ValidationRuleSnakeCase, ViewFileCamelCase,
};

/// Preset configurations for convention-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Every rule with its default severity.
    #[default]
    Recommended,
    /// Every rule, with warnings promoted to errors.
    Strict,
    /// Core naming rules only, for gradual adoption.
    Minimal,
}

/// Rules enabled by the minimal preset.
const MINIMAL_RULES: &[&str] = &[
    ControllerName::NAME,
    ModelName::NAME,
    TableName::NAME,
    PivotTableName::NAME,
    ForeignKeyName::NAME,
];

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Strict, Self::Minimal];

    /// Parses a preset name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Preset name as used in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Returns true if the preset enables the rule.
    #[must_use]
    pub fn includes(self, rule_id: &str) -> bool {
        match self {
            Self::Recommended | Self::Strict => true,
            Self::Minimal => MINIMAL_RULES.contains(&rule_id),
        }
    }

    /// Returns the rules for this preset with default options.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        all_rules()
            .into_iter()
            .filter(|rule| self.includes(rule.id()))
            .collect()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns every built-in rule with default options, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    configured_rules(&Config::default())
}

/// Returns every built-in rule, honouring rule options from `config`.
///
/// Supported options:
/// - `[rules.controller-name] suffix = "Controller"`
/// - `[rules.view-file-camel-case] extensions = [".blade.php", ".php"]`
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let mut controller = ControllerName::new();
    if let Some(rule_config) = config.rule_config(ControllerName::NAME) {
        controller = controller.suffix(rule_config.get_str("suffix", "Controller"));
    }

    let mut views = ViewFileCamelCase::new();
    if let Some(rule_config) = config.rule_config(ViewFileCamelCase::NAME) {
        let extensions = rule_config.get_str_array("extensions");
        if !extensions.is_empty() {
            views = views.extensions(extensions);
        }
    }

    vec![
        Box::new(controller),
        Box::new(ModelName::new()),
        Box::new(ClassPascalCase::new()),
        Box::new(ClassFileName::new()),
        Box::new(NoTypeSuffix::new()),
        Box::new(MethodCamelCase::new()),
        Box::new(ResourceActionVerb::new()),
        Box::new(RouteUrlKebabCase::new()),
        Box::new(RouteLeadingSlash::new()),
        Box::new(RouteNameCamelCase::new()),
        Box::new(RouteParamCamelCase::new()),
        Box::new(TableName::new()),
        Box::new(ColumnSnakeCase::new()),
        Box::new(ColumnModelPrefix::new()),
        Box::new(PivotTableName::new()),
        Box::new(ForeignKeyName::new()),
        Box::new(ConfigFileKebabCase::new()),
        Box::new(ConfigKeySnakeCase::new()),
        Box::new(MigrationFileName::new()),
        Box::new(views),
        Box::new(CommandNameKebabCase::new()),
        Box::new(ValidationRuleSnakeCase::new()),
    ]
}

/// Builds the registry for a run.
///
/// Every built-in rule is registered so configuration can name any of them;
/// rules outside the preset start disabled. The `[rules.<id>]` overlay is
/// applied last and wins over the preset.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownRule`] if the configuration names a rule
/// that does not exist.
pub fn build_registry(preset: Preset, config: &Config) -> Result<RuleRegistry, RegistryError> {
    let mut registry = RuleRegistry::from_rules(configured_rules(config))?;

    let ids: Vec<&'static str> = registry.iter().map(|entry| entry.rule().id()).collect();
    for id in ids {
        if !preset.includes(id) {
            registry.disable(id)?;
        }
        if preset == Preset::Strict
            && registry
                .get(id)
                .is_some_and(|entry| entry.severity() == Severity::Warning)
        {
            registry.set_severity(id, Severity::Error)?;
        }
    }

    registry.apply_config(config)?;
    debug!(
        "Built registry for preset {}: {}/{} rules enabled",
        preset,
        registry.enabled_count(),
        registry.len()
    );
    Ok(registry)
}
