//! JSON deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization of the facts document
//! written by a front-end. They are converted to validated [`Fact`]s by the
//! loader.
//!
//! [`Fact`]: crate::Fact

use serde::Deserialize;

use crate::fact::{ClassKind, RelationKind};

/// Raw facts document: `{ "facts": [ ... ] }`.
///
/// Records are kept as raw JSON so a malformed record can be rejected on its
/// own without failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactDocumentDto {
    /// Fact records, in front-end order.
    #[serde(default)]
    pub facts: Vec<serde_json::Value>,
}

/// One fact record: a location plus a kind-tagged payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FactRecordDto {
    /// File the fact was observed in.
    pub file: String,
    /// Line number (`0` or absent for the whole file).
    #[serde(default)]
    pub line: usize,
    /// Column number.
    #[serde(default)]
    pub column: usize,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub fact: FactDto,
}

/// Kind-tagged fact payload.
///
/// Composite kinds are intentionally absent: they are only produced by the
/// composite join.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FactDto {
    /// Class declaration.
    Class {
        /// Class name.
        name: String,
        /// Framework role.
        class_kind: ClassKind,
        /// Declaring file name.
        #[serde(default)]
        file_name: Option<String>,
    },
    /// Method declaration.
    Method {
        /// Method name.
        name: String,
        /// Kind of the declaring class.
        owner_kind: ClassKind,
        /// HTTP verbs routed to the method.
        #[serde(default)]
        verbs: Vec<String>,
    },
    /// Route definition.
    Route {
        /// URL path.
        path: String,
        /// HTTP verb.
        #[serde(default)]
        http_verb: String,
        /// Route name.
        #[serde(default)]
        name: Option<String>,
        /// Route parameter names.
        #[serde(default)]
        params: Vec<String>,
    },
    /// Configuration key. The config file is the record's `file`.
    ConfigEntry {
        /// Dotted key path.
        key: String,
    },
    /// Migration file.
    Migration {
        /// Migration file name.
        name: String,
        /// Recorded timestamp.
        #[serde(default)]
        timestamp: Option<String>,
    },
    /// View file. Defaults to the record's `file` when `path` is absent.
    View {
        /// View path.
        #[serde(default)]
        path: Option<String>,
    },
    /// Database table.
    Table {
        /// Table name.
        name: String,
        /// Backing model.
        #[serde(default)]
        model: Option<String>,
        /// Pivot table flag.
        #[serde(default)]
        pivot: bool,
    },
    /// Database column.
    Column {
        /// Owning table.
        table: String,
        /// Column name.
        name: String,
        /// Referenced table.
        #[serde(default)]
        references: Option<String>,
    },
    /// Model relation.
    Relation {
        /// Declaring model.
        model: String,
        /// Related model.
        related: String,
        /// Relation kind.
        relation: RelationKind,
        /// Pivot table.
        #[serde(default)]
        table: Option<String>,
        /// Foreign key column.
        #[serde(default)]
        foreign_key: Option<String>,
    },
    /// Console command.
    Command {
        /// Invocation name.
        name: String,
    },
    /// Validation rule identifier.
    ValidationRule {
        /// Identifier.
        identifier: String,
    },
}
