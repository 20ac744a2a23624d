//! Output formatting for check results.
//!
//! Diagnostics go to stdout; logs go to stderr, so JSON output stays
//! machine-readable.

use anyhow::Result;
use convention_lint_core::{Diagnostic, FixPlan, FixTarget, RejectedFact, Report, Severity};
use serde::Serialize;

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(
    report: &Report,
    rejected: &[RejectedFact],
    plan: Option<&FixPlan<'_>>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, rejected, plan),
        OutputFormat::Json => return print_json(report, rejected, plan),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Internal => "\x1b[35minternal\x1b[0m",
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_text(report: &Report, rejected: &[RejectedFact], plan: Option<&FixPlan<'_>>) {
    let (internal, errors, warnings, infos) = report.count_by_severity();

    for diagnostic in &report.diagnostics {
        println!(
            "{} {} at {}",
            diagnostic.code, diagnostic.rule_id, diagnostic.location
        );
        println!("  {}: {}", severity_label(diagnostic.severity), diagnostic.message);
        if let Some(suggestion) = &diagnostic.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    for fact in rejected {
        println!("  \x1b[33mskipped\x1b[0m {fact}");
    }

    if let Some(plan) = plan {
        println!("Fix plan ({} fixes, {} superseded):", plan.len(), plan.superseded_count());
        for fix in &plan.fixes {
            println!(
                "  {} {}: `{}` ({})",
                fix.location(),
                fix.target(),
                fix.new_text(),
                fix.diagnostic.rule_id
            );
        }
        println!();
    }

    let summary_color = if internal > 0 || errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s), {} internal in {} fact(s)\x1b[0m",
        summary_color, errors, warnings, infos, internal, report.facts_checked
    );
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: &'a [Diagnostic],
    rejected: Vec<JsonRejected>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixes: Option<Vec<JsonFix<'a>>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonRejected {
    index: usize,
    location: Option<String>,
    error: String,
}

#[derive(Serialize)]
struct JsonFix<'a> {
    location: String,
    target: FixTarget,
    rule_id: &'a str,
    new_text: &'a str,
    superseded: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    facts_checked: usize,
    errors: usize,
    warnings: usize,
    infos: usize,
    internal: usize,
}

fn print_json(
    report: &Report,
    rejected: &[RejectedFact],
    plan: Option<&FixPlan<'_>>,
) -> Result<()> {
    let (internal, errors, warnings, infos) = report.count_by_severity();
    let output = JsonOutput {
        diagnostics: &report.diagnostics,
        rejected: rejected
            .iter()
            .map(|r| JsonRejected {
                index: r.index,
                location: r.location.as_ref().map(ToString::to_string),
                error: r.error.to_string(),
            })
            .collect(),
        fixes: plan.map(|plan| {
            plan.fixes
                .iter()
                .map(|fix| JsonFix {
                    location: fix.location().to_string(),
                    target: fix.target(),
                    rule_id: &fix.diagnostic.rule_id,
                    new_text: fix.new_text(),
                    superseded: fix.superseded.iter().map(|d| d.rule_id.as_str()).collect(),
                })
                .collect()
        }),
        summary: JsonSummary {
            facts_checked: report.facts_checked,
            errors,
            warnings,
            infos,
            internal,
        },
    };

    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &Report) {
    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }
}
