//! Deterministic resolution of conflicting suggested fixes.
//!
//! Several rules may suggest a replacement for the same identifier (for
//! example a casing rule and a pluralization rule on one class name). A
//! [`FixPlan`] keeps exactly one fix per identifier, keyed by location and
//! [`FixTarget`]: the one from the rule registered first (lowest priority),
//! ties broken by rule id. The other fixes are reported as superseded and
//! never applied. Fixes for different identifiers of one fact (a route's
//! path and its name) never conflict.

use std::collections::BTreeMap;

use crate::types::{Diagnostic, FixTarget, Location, Replacement, Report};

/// One accepted fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFix<'a> {
    /// The diagnostic whose fix was accepted.
    pub diagnostic: &'a Diagnostic,
    /// Diagnostics at the same location whose fixes lost.
    pub superseded: Vec<&'a Diagnostic>,
}

impl PlannedFix<'_> {
    fn replacement(&self) -> Option<&Replacement> {
        self.diagnostic
            .suggestion
            .as_ref()
            .and_then(|s| s.replacement.as_ref())
    }

    /// Location the fix applies to.
    #[must_use]
    pub fn location(&self) -> &Location {
        self.replacement()
            .map_or(&self.diagnostic.location, |r| &r.location)
    }

    /// Identifier the fix rewrites.
    #[must_use]
    pub fn target(&self) -> FixTarget {
        self.replacement().map(|r| r.target).unwrap_or_default()
    }

    /// Replacement text.
    #[must_use]
    pub fn new_text(&self) -> &str {
        self.diagnostic.fix_text().unwrap_or_default()
    }
}

/// Accepted fixes for a report, ordered by location then target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixPlan<'a> {
    /// One fix per location.
    pub fixes: Vec<PlannedFix<'a>>,
}

impl<'a> FixPlan<'a> {
    /// Builds the plan from every diagnostic that carries a replacement.
    #[must_use]
    pub fn from_report(report: &'a Report) -> Self {
        let mut by_target: BTreeMap<(&Location, FixTarget), Vec<&Diagnostic>> = BTreeMap::new();
        for diagnostic in &report.diagnostics {
            let replacement = diagnostic
                .suggestion
                .as_ref()
                .and_then(|s| s.replacement.as_ref());
            if let Some(replacement) = replacement {
                by_target
                    .entry((&replacement.location, replacement.target))
                    .or_default()
                    .push(diagnostic);
            }
        }

        let fixes = by_target
            .into_values()
            .map(|mut candidates| {
                candidates.sort_by(|a, b| {
                    a.priority
                        .cmp(&b.priority)
                        .then_with(|| a.rule_id.cmp(&b.rule_id))
                        .then_with(|| a.message.cmp(&b.message))
                });
                let diagnostic = candidates.remove(0);
                PlannedFix {
                    diagnostic,
                    superseded: candidates,
                }
            })
            .collect();

        Self { fixes }
    }

    /// Number of accepted fixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    /// Returns true if no fix was planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Number of fixes dropped because of conflicts.
    #[must_use]
    pub fn superseded_count(&self) -> usize {
        self.fixes.iter().map(|f| f.superseded.len()).sum()
    }
}
