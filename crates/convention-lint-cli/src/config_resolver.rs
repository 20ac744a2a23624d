//! Configuration file resolution and loading.
//!
//! The configuration file is resolved in a fixed priority order:
//!
//! 1. `--config` flag or `$CONVENTION_LINT_CONFIG` (explicit path)
//! 2. `{project}/convention-lint.toml` or `{project}/.convention-lint.toml`
//! 3. `$CONVENTION_LINT_CONFIG_DIR/config.toml` or `~/.convention-lint/config.toml`
//! 4. No config found → defaults

use convention_lint_core::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config`.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points to.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. A missing
    /// explicit file is an error; [`ConfigSource::Default`] never fails.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match self {
            Self::Default => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
            Self::Global(p) => {
                tracing::info!("Using global config: {}", p.display());
                Config::from_file(p)
            }
            Self::Explicit(p) | Self::Project(p) => {
                tracing::debug!("Using config: {}", p.display());
                Config::from_file(p)
            }
        }
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["convention-lint.toml", ".convention-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Takes `global_dir` as a parameter so tests do not touch the environment.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(candidate) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", candidate.display());
        return ConfigSource::Project(candidate);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// Returns the global config directory: `$CONVENTION_LINT_CONFIG_DIR`, else
/// `~/.convention-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("CONVENTION_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".convention-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_and_is_not_checked_for_existence() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("convention-lint.toml"), "").unwrap();

        let result = resolve_inner(project.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
        assert!(matches!(result.load(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn plain_project_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".convention-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join(".convention-lint.toml"))
        );

        fs::write(tmp.path().join("convention-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), None, None),
            ConfigSource::Project(tmp.path().join("convention-lint.toml"))
        );
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("convention-lint.toml")).unwrap();
        assert_eq!(resolve_inner(tmp.path(), None, None), ConfigSource::Default);
    }

    #[test]
    fn global_fallback_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );

        fs::write(project.path().join("convention-lint.toml"), "").unwrap();
        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn empty_global_dir_returns_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }

    #[test]
    fn load_reads_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("convention-lint.toml"),
            "preset = \"strict\"\nfail_on = \"warning\"\n\n[rules.table-name]\nenabled = false\n",
        )
        .unwrap();

        let config = resolve_inner(tmp.path(), None, None).load().unwrap();
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(
            config.rule_config("table-name").and_then(|r| r.enabled),
            Some(false)
        );
    }

    #[test]
    fn load_reports_parse_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("convention-lint.toml"), "preset = [").unwrap();
        assert!(matches!(
            resolve_inner(tmp.path(), None, None).load(),
            Err(ConfigError::Parse { .. })
        ));
    }
}
