//! Evaluator: streams facts through the registry and builds a report.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::composite::join_composites;
use crate::config::EngineConfig;
use crate::fact::Fact;
use crate::registry::{RegisteredRule, RuleRegistry};
use crate::rule::{FindingScope, RuleError, Verdict};
use crate::types::{Diagnostic, Replacement, Report, Severity, Suggestion};

/// Code attached to diagnostics produced when a rule fails to evaluate a fact.
pub const RULE_EVALUATION_ERROR_CODE: &str = "CL999";

/// Errors that end an evaluation run without a report.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The run was cancelled; partial results were discarded.
    #[error("evaluation cancelled")]
    Cancelled,

    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// An exclude pattern is not a valid glob.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Cooperative cancellation flag shared between a caller and a run.
///
/// Cancellation is observed between fact batches.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Builder for configuring an [`Evaluator`].
#[derive(Default)]
pub struct EvaluatorBuilder {
    registry: Option<RuleRegistry>,
    parallelism: Option<usize>,
    batch_size: Option<usize>,
    exclude_patterns: Vec<String>,
}

impl EvaluatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule registry. The evaluator takes ownership; the registry
    /// is immutable from here on.
    #[must_use]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the number of worker threads (default: rayon's global pool).
    #[must_use]
    pub fn parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    /// Sets the number of facts evaluated per batch.
    #[must_use]
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Adds a glob pattern; facts located in matching files are skipped.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Applies the `[engine]` section of a configuration.
    #[must_use]
    pub fn engine_config(mut self, engine: &EngineConfig) -> Self {
        if let Some(threads) = engine.parallelism {
            self.parallelism = Some(threads);
        }
        self.batch_size = Some(engine.batch_size);
        self.exclude_patterns.extend(engine.exclude.iter().cloned());
        self
    }

    /// Builds the evaluator.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is invalid or the worker pool
    /// cannot be created.
    pub fn build(self) -> Result<Evaluator, EvaluationError> {
        let exclude = self
            .exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let pool = match self.parallelism {
            Some(threads) if threads > 0 => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            ),
            _ => None,
        };

        Ok(Evaluator {
            registry: Arc::new(self.registry.unwrap_or_default()),
            pool,
            batch_size: self.batch_size.filter(|&n| n > 0).unwrap_or(256),
            exclude,
        })
    }
}

/// Evaluates facts against the registered rules.
///
/// Use [`Evaluator::builder()`] to construct an instance. An evaluator holds
/// no per-run state and can run any number of analyses.
pub struct Evaluator {
    registry: Arc<RuleRegistry>,
    pool: Option<rayon::ThreadPool>,
    batch_size: usize,
    exclude: Vec<glob::Pattern>,
}

impl Evaluator {
    /// Creates a new builder for configuring an evaluator.
    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Returns the registry this evaluator runs.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Evaluates facts and returns a sorted, deduplicated report.
    ///
    /// Facts are evaluated independently; a rule that errors or panics on a
    /// fact yields an `internal` diagnostic for that fact only.
    #[must_use]
    pub fn evaluate(&self, facts: &[Fact]) -> Report {
        match self.run(facts, None) {
            Ok(report) => report,
            // Only reachable with a cancel token.
            Err(_) => Report::new(),
        }
    }

    /// Joins composite facts, then evaluates the original and composite facts.
    #[must_use]
    pub fn evaluate_project(&self, mut facts: Vec<Fact>) -> Report {
        let composites = join_composites(&facts);
        facts.extend(composites);
        self.evaluate(&facts)
    }

    /// Evaluates facts, checking `cancel` between batches.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Cancelled`] if cancellation was requested
    /// before the run finished. No partial report is returned.
    pub fn evaluate_cancellable(
        &self,
        facts: &[Fact],
        cancel: &CancelToken,
    ) -> Result<Report, EvaluationError> {
        self.run(facts, Some(cancel))
    }

    fn run(&self, facts: &[Fact], cancel: Option<&CancelToken>) -> Result<Report, EvaluationError> {
        info!(
            "Evaluating {} facts with {} enabled rules",
            facts.len(),
            self.registry.enabled_count()
        );

        let evaluate_batches = || {
            facts
                .par_chunks(self.batch_size)
                .map(|batch| {
                    if cancel.is_some_and(CancelToken::is_cancelled) {
                        return Err(EvaluationError::Cancelled);
                    }
                    Ok(self.evaluate_batch(batch))
                })
                .collect::<Result<Vec<_>, _>>()
        };

        let batches = match &self.pool {
            Some(pool) => pool.install(evaluate_batches),
            None => evaluate_batches(),
        }
        .map_err(|e| {
            warn!("Evaluation cancelled, discarding partial results");
            e
        })?;

        let mut report = Report::new();
        for batch in batches {
            report.extend(batch);
        }
        report.finalize();

        info!(
            "Evaluation complete: {} diagnostics for {} facts",
            report.len(),
            report.facts_checked
        );
        Ok(report)
    }

    fn evaluate_batch(&self, batch: &[Fact]) -> Report {
        let mut report = Report::new();
        for fact in batch {
            if self.is_excluded(fact) {
                debug!("Excluding fact at {}", fact.location());
                continue;
            }
            report.facts_checked += 1;
            for entry in self.registry.rules_for(fact.kind()) {
                if let Some(diagnostic) = evaluate_rule(entry, fact) {
                    report.add(diagnostic);
                }
            }
        }
        report
    }

    fn is_excluded(&self, fact: &Fact) -> bool {
        let file = fact.location().file.to_string_lossy();
        self.exclude.iter().any(|p| p.matches(&file))
    }
}

/// Runs one rule against one fact, isolating rule errors and panics.
fn evaluate_rule(entry: &RegisteredRule, fact: &Fact) -> Option<Diagnostic> {
    let rule = entry.rule();
    let outcome = catch_unwind(AssertUnwindSafe(|| rule.check(fact)))
        .unwrap_or_else(|payload| Err(RuleError::Malformed(panic_message(payload.as_ref()))));

    match outcome {
        Ok(Verdict::Pass) => None,
        Ok(Verdict::Violation(finding)) => {
            let location = match finding.scope {
                FindingScope::Fact => fact.location().clone(),
                FindingScope::File => fact.location().to_file(),
            };
            let mut diagnostic = Diagnostic::new(
                rule.id(),
                rule.code(),
                entry.severity(),
                location.clone(),
                finding.message,
            )
            .with_priority(entry.priority());
            if let Some(fix) = finding.fix {
                diagnostic = diagnostic.with_suggestion(Suggestion::with_fix(
                    format!("replace with `{fix}`"),
                    Replacement::new(location, finding.target, fix),
                ));
            }
            Some(diagnostic)
        }
        Err(e) => {
            error!(
                "Rule {} failed on {} fact at {}: {}",
                rule.id(),
                fact.kind(),
                fact.location(),
                e
            );
            Some(
                Diagnostic::new(
                    rule.id(),
                    RULE_EVALUATION_ERROR_CODE,
                    Severity::Internal,
                    fact.location().clone(),
                    format!("rule evaluation error: {e}"),
                )
                .with_priority(entry.priority()),
            )
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("rule panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("rule panicked: {s}")
    } else {
        "rule panicked".to_string()
    }
}
