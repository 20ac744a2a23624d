//! # convention-lint-core
//!
//! Core engine for naming and structural convention linting.
//!
//! Front-ends extract *facts* (class declarations, routes, tables, ...)
//! from a codebase and hand them to this crate, which checks every fact
//! against the registered rules and produces a deterministic report. It
//! includes:
//!
//! - [`Fact`] and its payload types, validated at construction
//! - [`Rule`] trait for per-fact convention checks
//! - [`RuleRegistry`] for grouping, enabling, and configuring rules
//! - [`Evaluator`] for parallel, fault-isolated evaluation
//! - [`join_composites`] for pivot table and foreign key composites
//! - [`FixPlan`] for resolving conflicting suggested fixes
//!
//! ## Example
//!
//! ```ignore
//! use convention_lint_core::{load_facts, Evaluator, RuleRegistry};
//!
//! let mut registry = RuleRegistry::new();
//! registry.register(MyRule::new())?;
//!
//! let evaluator = Evaluator::builder().registry(registry).build()?;
//! let batch = load_facts(&json)?;
//! let report = evaluator.evaluate_project(batch.facts);
//! for diagnostic in &report.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composite;
mod config;
mod evaluator;
mod fact;
mod fixes;
mod input;
mod registry;
mod rule;
mod types;

/// Naming utilities for rule implementations.
pub mod utils;

pub use composite::join_composites;
pub use config::{Config, ConfigError, EngineConfig, RuleConfig};
pub use evaluator::{
    CancelToken, EvaluationError, Evaluator, EvaluatorBuilder, RULE_EVALUATION_ERROR_CODE,
};
pub use fact::{
    ClassDecl, ClassKind, ColumnDecl, CommandDecl, ConfigEntry, Fact, FactData, FactError,
    FactKind, ForeignKeyRef, HttpVerb, MethodDecl, MigrationFile, PivotTable, RelationDecl,
    RelationKind, RouteDecl, TableDecl, ValidationRuleRef, ViewFile,
};
pub use fixes::{FixPlan, PlannedFix};
pub use input::{
    load_facts, load_facts_from_file, FactBatch, InputError, RecordError, RejectedFact,
};
pub use registry::{RegisteredRule, RegistryError, RuleRegistry};
pub use rule::{Finding, FindingScope, Rule, RuleBox, RuleError, Verdict};
pub use types::{Diagnostic, FixTarget, Location, Replacement, Report, Severity, Suggestion};
