//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# convention-lint configuration

# Rule preset: "recommended" (default), "strict" or "minimal"
preset = "recommended"

# Lowest severity that fails the run: "info", "warning" or "error"
fail_on = "error"

[engine]
# Worker threads (default: one per core)
# parallelism = 4

# Facts per evaluation batch
batch_size = 256

# Glob patterns; facts from matching files are skipped
exclude = [
    "vendor/**",
    "storage/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.controller-name]
enabled = true
# severity = "warning"  # Override default severity
suffix = "Controller"

[rules.view-file-camel-case]
extensions = [".blade.php", ".php"]

# [rules.route-name-camel-case]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_default_config(Path::new("convention-lint.toml"), force)?;

    println!("Created convention-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit convention-lint.toml to configure rules");
    println!("  2. Run: convention-lint check facts.json");

    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Config;
    use convention_lint_rules::{build_registry, Preset};
    use tempfile::TempDir;

    #[test]
    fn default_config_builds_a_registry() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let preset = Preset::parse(config.preset.as_deref().unwrap()).unwrap();
        let registry = build_registry(preset, &config).unwrap();
        assert_eq!(registry.enabled_count(), registry.len());
        assert_eq!(config.engine.exclude, vec!["vendor/**", "storage/**"]);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("convention-lint.toml");
        std::fs::write(&path, "preset = \"minimal\"\n").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "preset = \"minimal\"\n");

        write_default_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
