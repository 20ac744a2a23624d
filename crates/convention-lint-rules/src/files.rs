//! Migration and view file naming rules.
//!
//! # Good Patterns
//!
//! ```text
//! 2023_05_01_000000_create_articles_table.php
//! resources/views/showFiltered.blade.php
//! ```

use convention_lint_core::utils::{is_camel_case, is_snake_case, to_camel_case, to_snake_case};
use convention_lint_core::{
    Fact, FactKind, Finding, FixTarget, MigrationFile, Rule, RuleError, Severity, Verdict,
    ViewFile,
};

use crate::config_files::split_file_name;

/// Migration file names are a `YYYY_MM_DD_HHMMSS` timestamp followed by a
/// `snake_case` description.
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationFileName;

impl MigrationFileName {
    /// Rule code.
    pub const CODE: &'static str = "CL050";
    /// Rule id.
    pub const NAME: &'static str = "migration-file-name";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Splits `2023_05_01_000000_create_articles_table` into the timestamp and
/// the description. Returns `None` when there is no valid timestamp prefix.
fn split_migration_name(stem: &str) -> Option<(&str, &str)> {
    const PREFIX_LEN: usize = "YYYY_MM_DD_HHMMSS".len();

    let prefix = stem.get(..PREFIX_LEN)?;
    let parts: Vec<&str> = prefix.split('_').collect();
    let &[year, month, day, time] = parts.as_slice() else {
        return None;
    };
    let digits = |s: &str, len: usize| s.len() == len && s.chars().all(|c| c.is_ascii_digit());
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2) && digits(time, 6)) {
        return None;
    }

    let number = |s: &str| s.parse::<u32>().ok();
    let in_range = |s: &str, low: u32, high: u32| number(s).is_some_and(|n| (low..=high).contains(&n));
    let (Some(year), Some(month)) = (number(year), number(month)) else {
        return None;
    };
    if !((1..=12).contains(&month)
        && in_range(day, 1, days_in_month(year, month))
        && in_range(&time[..2], 0, 23)
        && in_range(&time[2..4], 0, 59)
        && in_range(&time[4..], 0, 59))
    {
        return None;
    }

    let description = stem[PREFIX_LEN..].strip_prefix('_').unwrap_or("");
    Some((prefix, description))
}

impl Rule for MigrationFileName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Migration files are a timestamp prefix plus a snake_case description"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Migration
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let migration: &MigrationFile = fact
            .as_migration()
            .ok_or_else(|| RuleError::unexpected(FactKind::Migration, fact))?;
        let (stem, extension) = split_file_name(migration.name());

        let Some((timestamp, description)) = split_migration_name(stem) else {
            return Ok(Verdict::Violation(Finding::new(format!(
                "Migration `{stem}` must start with a `YYYY_MM_DD_HHMMSS` timestamp"
            ))));
        };

        if let Some(recorded) = migration.timestamp() {
            if recorded != timestamp {
                return Ok(Verdict::Violation(Finding::new(format!(
                    "Migration timestamp `{timestamp}` does not match the recorded timestamp `{recorded}`"
                ))));
            }
        }

        if description.is_empty() {
            return Ok(Verdict::Violation(Finding::new(format!(
                "Migration `{stem}` must describe its change after the timestamp"
            ))));
        }
        if is_snake_case(description) {
            return Ok(Verdict::Pass);
        }

        let expected = format!("{timestamp}_{}{extension}", to_snake_case(description));
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Migration descriptions must be snake_case: expected `{expected}`"
            ))
            .with_fix(expected)
            .targeting(FixTarget::FileName),
        ))
    }
}

/// View file names are `camelCase`.
#[derive(Debug, Clone)]
pub struct ViewFileCamelCase {
    /// Extensions stripped before checking, longest match first.
    pub extensions: Vec<String>,
}

impl Default for ViewFileCamelCase {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFileCamelCase {
    /// Rule code.
    pub const CODE: &'static str = "CL060";
    /// Rule id.
    pub const NAME: &'static str = "view-file-camel-case";

    /// Creates the rule with template extensions `.blade.php` and `.php`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extensions: vec![".blade.php".to_string(), ".php".to_string()],
        }
    }

    /// Replaces the recognised view extensions.
    #[must_use]
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    fn split<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        let base = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
        self.extensions
            .iter()
            .filter(|ext| base.len() > ext.len() && base.ends_with(ext.as_str()))
            .max_by_key(|ext| ext.len())
            .map_or_else(
                || split_file_name(base),
                |ext| base.split_at(base.len() - ext.len()),
            )
    }
}

impl Rule for ViewFileCamelCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "View file names are camelCase"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::View
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let view: &ViewFile = fact
            .as_view()
            .ok_or_else(|| RuleError::unexpected(FactKind::View, fact))?;
        let (stem, extension) = self.split(view.path());
        if is_camel_case(stem) {
            return Ok(Verdict::Pass);
        }

        let expected = format!("{}{extension}", to_camel_case(stem));
        Ok(Verdict::Violation(
            Finding::new(format!("View file names must be camelCase: expected `{expected}`"))
                .with_fix(expected)
                .targeting(FixTarget::FileName)
                .file_scoped(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Location;

    fn migration(name: &str, timestamp: Option<&str>) -> Fact {
        Fact::new(
            Location::file(format!("database/migrations/{name}")),
            MigrationFile::new(name, timestamp.map(Into::into)).unwrap(),
        )
    }

    fn view(path: &str) -> Fact {
        Fact::new(Location::file(path), ViewFile::new(path).unwrap())
    }

    fn message(verdict: Verdict) -> String {
        match verdict {
            Verdict::Violation(finding) => finding.message,
            Verdict::Pass => panic!("expected a violation"),
        }
    }

    #[test]
    fn leap_day_is_a_valid_timestamp() {
        assert!(split_migration_name("2024_02_29_120000_create_events_table").is_some());
        assert!(split_migration_name("2000_02_29_120000_x").is_some());
        assert!(split_migration_name("1900_02_29_120000_x").is_none());
    }

    #[test]
    fn valid_migration_passes() {
        let rule = MigrationFileName::new();
        assert!(rule
            .check(&migration("2023_05_01_000000_create_articles_table", None))
            .unwrap()
            .is_pass());
        assert!(rule
            .check(&migration(
                "2023_05_01_000000_create_articles_table.php",
                Some("2023_05_01_000000")
            ))
            .unwrap()
            .is_pass());
    }

    #[test]
    fn migration_without_timestamp_is_flagged() {
        let rule = MigrationFileName::new();
        for name in [
            "create_articles_table",
            "2023_5_1_000000_create",
            "2023_13_01_000000_x",
            "2023_02_29_000000_x",
            "2023_04_31_000000_x",
        ] {
            assert!(message(rule.check(&migration(name, None)).unwrap()).contains("timestamp"), "{name}");
        }
    }

    #[test]
    fn migration_description_must_be_snake_case() {
        let rule = MigrationFileName::new();
        let verdict = rule
            .check(&migration("2023_05_01_000000_CreateArticlesTable.php", None))
            .unwrap();
        let Verdict::Violation(finding) = verdict else {
            panic!("expected a violation");
        };
        assert_eq!(
            finding.fix.as_deref(),
            Some("2023_05_01_000000_create_articles_table.php")
        );

        assert!(message(rule.check(&migration("2023_05_01_000000", None)).unwrap())
            .contains("describe"));
    }

    #[test]
    fn migration_timestamp_must_match_recorded() {
        let verdict = MigrationFileName::new()
            .check(&migration(
                "2023_05_01_000000_create_articles_table",
                Some("2024_01_01_000000"),
            ))
            .unwrap();
        assert!(message(verdict).contains("does not match"));
    }

    #[test]
    fn view_names_are_camel_case() {
        let rule = ViewFileCamelCase::new();
        assert!(rule.check(&view("resources/views/showFiltered.blade.php")).unwrap().is_pass());
        assert!(rule.check(&view("resources/views/index.php")).unwrap().is_pass());

        let Verdict::Violation(finding) =
            rule.check(&view("resources/views/show_filtered.blade.php")).unwrap()
        else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("showFiltered.blade.php"));
    }

    #[test]
    fn view_extensions_are_configurable() {
        let rule = ViewFileCamelCase::new().extensions(vec![".twig".to_string()]);
        assert!(rule.check(&view("templates/userProfile.twig")).unwrap().is_pass());
        assert!(!rule.check(&view("templates/user-profile.twig")).unwrap().is_pass());
    }
}
