//! Check command implementation.

use anyhow::{anyhow, bail, Context, Result};
use convention_lint_core::{
    load_facts, load_facts_from_file, EngineConfig, Evaluator, FactBatch, FixPlan, RegistryError,
    RuleRegistry,
};
use convention_lint_rules::{build_registry, Preset};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options of one `check` invocation.
pub struct CheckOptions<'a> {
    /// Facts document path, `-` for stdin.
    pub facts: &'a Path,
    /// Output format.
    pub format: OutputFormat,
    /// Preset name from the command line.
    pub preset: Option<&'a str>,
    /// Comma-separated rule ids or codes to run exclusively.
    pub rules: Option<&'a str>,
    /// Extra exclude globs.
    pub exclude: &'a [String],
    /// Print the fix plan.
    pub show_fixes: bool,
    /// Resolved configuration file.
    pub source: &'a ConfigSource,
}

/// Runs the check command.
pub fn run(opts: &CheckOptions<'_>) -> Result<ExitCode> {
    let config = opts.source.load().with_context(|| match opts.source.path() {
        Some(p) => format!("Failed to load config: {}", p.display()),
        None => "Failed to load config".to_string(),
    })?;

    let preset_name = opts
        .preset
        .or(config.preset.as_deref())
        .unwrap_or(Preset::default().as_str());
    let Some(preset) = Preset::parse(preset_name) else {
        bail!("Unknown preset `{preset_name}` (expected recommended, strict or minimal)");
    };

    let mut registry = build_registry(preset, &config).map_err(render_registry_error)?;
    if let Some(filter) = opts.rules {
        select_rules(&mut registry, filter).map_err(render_registry_error)?;
    }

    let mut engine: EngineConfig = config.engine.clone();
    engine.exclude.extend(opts.exclude.iter().cloned());

    let evaluator = Evaluator::builder()
        .registry(registry)
        .engine_config(&engine)
        .build()
        .context("Failed to build evaluator")?;

    let batch = read_facts(opts.facts)?;
    tracing::info!(
        "Checking {} facts with preset {} ({} rules enabled)",
        batch.facts.len(),
        preset,
        evaluator.registry().enabled_count()
    );

    let report = evaluator.evaluate_project(batch.facts);
    let plan = opts.show_fixes.then(|| FixPlan::from_report(&report));

    super::output::print(&report, &batch.rejected, plan.as_ref(), opts.format)?;

    if report.has_diagnostics_at(config.fail_on()) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn read_facts(path: &Path) -> Result<FactBatch> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read facts from stdin")?;
        return load_facts(&json).context("Invalid facts document on stdin");
    }
    load_facts_from_file(path).with_context(|| format!("Invalid facts document: {}", path.display()))
}

/// Keeps only the rules named in `filter` (ids or codes) enabled.
fn select_rules(registry: &mut RuleRegistry, filter: &str) -> Result<(), RegistryError> {
    let mut selected = Vec::new();
    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let id = registry
            .iter()
            .map(|entry| entry.rule())
            .find(|rule| rule.id() == name || rule.code().eq_ignore_ascii_case(name))
            .map(|rule| rule.id())
            .ok_or_else(|| RegistryError::UnknownRule(name.to_string()))?;
        selected.push(id);
    }

    let all: Vec<&'static str> = registry.iter().map(|entry| entry.rule().id()).collect();
    for id in all {
        if selected.contains(&id) {
            registry.enable(id)?;
        } else {
            registry.disable(id)?;
        }
    }
    Ok(())
}

/// Renders a startup error with its miette help text.
fn render_registry_error(error: RegistryError) -> anyhow::Error {
    anyhow!("{:?}", miette::Report::new(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Config;

    fn registry() -> RuleRegistry {
        build_registry(Preset::Recommended, &Config::default()).unwrap()
    }

    #[test]
    fn select_rules_by_id_and_code() {
        let mut registry = registry();
        select_rules(&mut registry, "controller-name, cl030").unwrap();
        assert_eq!(registry.enabled_count(), 2);
        assert!(registry.get("table-name").unwrap().is_enabled());
        assert!(!registry.get("model-name").unwrap().is_enabled());
    }

    #[test]
    fn select_rules_rejects_unknown_names() {
        let mut registry = registry();
        let err = select_rules(&mut registry, "controller-name,bogus").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownRule(name) if name == "bogus"));
    }
}
