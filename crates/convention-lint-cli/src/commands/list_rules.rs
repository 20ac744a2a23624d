//! List rules command implementation.

use convention_lint_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<8} {:<28} {:<16} {:<9} Description",
        "Code", "Name", "Applies to", "Severity"
    );
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        println!(
            "{:<8} {:<28} {:<16} {:<9} {}",
            rule.code(),
            rule.id(),
            rule.applies_to().as_str(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let summary = match preset {
            Preset::Recommended => "all rules, default severities (default)",
            Preset::Strict => "all rules, warnings promoted to errors",
            Preset::Minimal => "controller, model, table, pivot table and foreign key names",
        };
        println!("  {:<12} - {}", preset.as_str(), summary);
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  convention-lint check facts.json --rules controller-name,table-name");
    println!("  convention-lint check facts.json --rules CL001,CL030");
}
