//! # convention-lint-rules
//!
//! Built-in convention rules for convention-lint.
//!
//! Each rule checks one naming or structural convention against one kind of
//! fact and is independently testable.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CL001 | `controller-name` | Controllers are a singular `PascalCase` noun plus `Controller` |
//! | CL002 | `model-name` | Models are a singular `PascalCase` noun |
//! | CL003 | `class-pascal-case` | Other classes, interfaces and traits are `PascalCase` |
//! | CL004 | `class-file-name` | Class files are named after their class |
//! | CL005 | `no-type-suffix` | No `Interface` / `Trait` name suffixes |
//! | CL010 | `method-camel-case` | Methods are `camelCase` |
//! | CL011 | `resource-action-verb` | Resource actions are routed by their conventional verb |
//! | CL020 | `route-url-kebab-case` | Route URL segments are `kebab-case` |
//! | CL021 | `route-leading-slash` | No leading slash on routes except the root |
//! | CL022 | `route-name-camel-case` | Route names are `camelCase` with dot hierarchy |
//! | CL023 | `route-param-camel-case` | Route parameters are `camelCase` |
//! | CL030 | `table-name` | Tables are plural `snake_case` |
//! | CL031 | `column-snake-case` | Columns are `snake_case` |
//! | CL032 | `column-model-prefix` | Columns do not repeat their model name |
//! | CL033 | `pivot-table-name` | Pivot tables are singular model names in alphabetical order |
//! | CL034 | `foreign-key-name` | Foreign keys are the singular model name plus `_id` |
//! | CL040 | `config-file-kebab-case` | Config files are `kebab-case` |
//! | CL041 | `config-key-snake-case` | Config keys are `snake_case` |
//! | CL050 | `migration-file-name` | Migrations are a timestamp plus a `snake_case` description |
//! | CL060 | `view-file-camel-case` | View files are `camelCase` |
//! | CL070 | `command-name-kebab-case` | Console commands are `kebab-case` |
//! | CL080 | `validation-rule-snake-case` | Validation rule identifiers are `snake_case` |
//!
//! ## Usage
//!
//! ```ignore
//! use convention_lint_core::{Config, Evaluator};
//! use convention_lint_rules::{build_registry, Preset};
//!
//! let registry = build_registry(Preset::Recommended, &Config::default())?;
//! let evaluator = Evaluator::builder().registry(registry).build()?;
//! let report = evaluator.evaluate_project(facts);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classes;
mod commands;
mod config_files;
mod database;
mod files;
mod methods;
mod presets;
mod routes;

pub use classes::{ClassFileName, ClassPascalCase, ControllerName, ModelName, NoTypeSuffix};
pub use commands::{CommandNameKebabCase, ValidationRuleSnakeCase};
pub use config_files::{ConfigFileKebabCase, ConfigKeySnakeCase};
pub use database::{ColumnModelPrefix, ColumnSnakeCase, ForeignKeyName, PivotTableName, TableName};
pub use files::{MigrationFileName, ViewFileCamelCase};
pub use methods::{MethodCamelCase, ResourceActionVerb};
pub use presets::{all_rules, build_registry, configured_rules, Preset};
pub use routes::{RouteLeadingSlash, RouteNameCamelCase, RouteParamCamelCase, RouteUrlKebabCase};

/// Re-export core types for convenience.
pub use convention_lint_core::{Diagnostic, Rule, Severity};
