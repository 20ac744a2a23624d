//! Config file and config key rules.
//!
//! # Good Patterns
//!
//! ```text
//! config/mail-services.php   → 'mailgun.api_key'
//! ```

use convention_lint_core::utils::{is_kebab_case, is_snake_case, to_kebab_case, to_snake_case};
use convention_lint_core::{
    ConfigEntry, Fact, FactKind, Finding, FixTarget, Rule, RuleError, Verdict,
};

fn entry_of(fact: &Fact) -> Result<&ConfigEntry, RuleError> {
    fact.as_config_entry()
        .ok_or_else(|| RuleError::unexpected(FactKind::ConfigEntry, fact))
}

/// Splits a path into its file name stem and the extension (with the dot).
pub(crate) fn split_file_name(path: &str) -> (&str, &str) {
    let base = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    match base.find('.') {
        Some(dot) if dot > 0 => base.split_at(dot),
        _ => (base, ""),
    }
}

/// Config file names are `kebab-case`.
///
/// Reported once per file, however many entries the file declares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigFileKebabCase;

impl ConfigFileKebabCase {
    /// Rule code.
    pub const CODE: &'static str = "CL040";
    /// Rule id.
    pub const NAME: &'static str = "config-file-kebab-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ConfigFileKebabCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Config file names are kebab-case"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::ConfigEntry
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let (stem, extension) = split_file_name(entry_of(fact)?.file());
        if is_kebab_case(stem) {
            return Ok(Verdict::Pass);
        }

        let expected = format!("{}{extension}", to_kebab_case(stem));
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Config file names must be kebab-case: expected `{expected}`"
            ))
            .with_fix(expected)
            .targeting(FixTarget::FileName)
            .file_scoped(),
        ))
    }
}

/// Config keys are `snake_case`, segment by segment. Numeric segments
/// (list indices) are allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigKeySnakeCase;

impl ConfigKeySnakeCase {
    /// Rule code.
    pub const CODE: &'static str = "CL041";
    /// Rule id.
    pub const NAME: &'static str = "config-key-snake-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_key_segment(segment: &str) -> bool {
    is_snake_case(segment) || (!segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()))
}

impl Rule for ConfigKeySnakeCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Config keys are snake_case"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::ConfigEntry
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let key = entry_of(fact)?.key();
        if key.split('.').all(is_key_segment) {
            return Ok(Verdict::Pass);
        }

        let expected = key
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                if is_key_segment(segment) {
                    segment.to_string()
                } else {
                    to_snake_case(segment)
                }
            })
            .collect::<Vec<_>>()
            .join(".");
        Ok(Verdict::Violation(
            Finding::new(format!("Config keys must be snake_case: expected `{expected}`"))
                .with_fix(expected)
                .targeting(FixTarget::Key),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::{FindingScope, Location};

    fn entry(file: &str, key: &str) -> Fact {
        Fact::new(Location::new(file, 7, 5), ConfigEntry::new(file, key).unwrap())
    }

    #[test]
    fn split_file_name_handles_dirs_and_extensions() {
        assert_eq!(split_file_name("config/mail-services.php"), ("mail-services", ".php"));
        assert_eq!(split_file_name("show.blade.php"), ("show", ".blade.php"));
        assert_eq!(split_file_name("config/app"), ("app", ""));
        assert_eq!(split_file_name(".env"), (".env", ""));
    }

    #[test]
    fn config_file_name_is_file_scoped() {
        let rule = ConfigFileKebabCase::new();
        assert!(rule.check(&entry("config/mail-services.php", "driver")).unwrap().is_pass());

        let Verdict::Violation(finding) =
            rule.check(&entry("config/mail_services.php", "driver")).unwrap()
        else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("mail-services.php"));
        assert_eq!(finding.scope, FindingScope::File);
    }

    #[test]
    fn config_keys_are_snake_case_per_segment() {
        let rule = ConfigKeySnakeCase::new();
        assert!(rule.check(&entry("config/app.php", "mailgun.api_key")).unwrap().is_pass());
        assert!(rule.check(&entry("config/app.php", "hosts.0.name")).unwrap().is_pass());

        let Verdict::Violation(finding) =
            rule.check(&entry("config/app.php", "mailgun.apiKey")).unwrap()
        else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("mailgun.api_key"));
    }
}
