//! Normalized, language-agnostic facts about a codebase.
//!
//! A [`Fact`] is a single structural observation (a class, a route, a config
//! key, ...) together with the [`Location`] it was observed at. Facts are
//! produced by an external front-end, validated on construction, and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::types::Location;

/// Discriminant of a [`Fact`], used to route facts to rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactKind {
    /// Class, interface or trait declaration.
    Class,
    /// Method declaration.
    Method,
    /// Route definition.
    Route,
    /// Configuration key.
    ConfigEntry,
    /// Database migration file.
    Migration,
    /// View template file.
    View,
    /// Database table.
    Table,
    /// Database column.
    Column,
    /// Relation declared on a model.
    Relation,
    /// Console command registration.
    Command,
    /// Validation rule identifier.
    ValidationRule,
    /// Composite: a many-to-many pivot table with both model names.
    PivotTable,
    /// Composite: a foreign key column with its referenced model.
    ForeignKey,
}

impl FactKind {
    /// All fact kinds, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Class,
        Self::Method,
        Self::Route,
        Self::ConfigEntry,
        Self::Migration,
        Self::View,
        Self::Table,
        Self::Column,
        Self::Relation,
        Self::Command,
        Self::ValidationRule,
        Self::PivotTable,
        Self::ForeignKey,
    ];

    /// Returns the kebab-case tag of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Route => "route",
            Self::ConfigEntry => "config-entry",
            Self::Migration => "migration",
            Self::View => "view",
            Self::Table => "table",
            Self::Column => "column",
            Self::Relation => "relation",
            Self::Command => "command",
            Self::ValidationRule => "validation-rule",
            Self::PivotTable => "pivot-table",
            Self::ForeignKey => "foreign-key",
        }
    }

    /// Returns true for kinds that are only produced by the composite join.
    #[must_use]
    pub fn is_composite(self) -> bool {
        matches!(self, Self::PivotTable | Self::ForeignKey)
    }
}

impl std::fmt::Display for FactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while constructing a fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactError {
    /// The fact is malformed and was rejected.
    #[error("invalid {kind} fact: {reason}")]
    InvalidFact {
        /// Kind of the rejected fact.
        kind: FactKind,
        /// Why it was rejected.
        reason: String,
    },
}

impl FactError {
    pub(crate) fn invalid(kind: FactKind, reason: impl Into<String>) -> Self {
        Self::InvalidFact {
            kind,
            reason: reason.into(),
        }
    }
}

/// Role of a class in the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// HTTP controller.
    Controller,
    /// ORM model.
    Model,
    /// Interface / contract.
    Contract,
    /// Trait / mixin.
    Trait,
    /// Console command class.
    Command,
    /// Anything else.
    Other,
}

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    /// GET
    Get,
    /// HEAD
    Head,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
}

impl HttpVerb {
    /// Parses a verb case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "HEAD" => Some(Self::Head),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        };
        f.write_str(s)
    }
}

/// Kind of relation declared between two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    /// Inverse one-to-one / one-to-many (holds the foreign key).
    BelongsTo,
    /// One-to-one.
    HasOne,
    /// One-to-many.
    HasMany,
    /// Many-to-many through a pivot table.
    BelongsToMany,
}

fn identifier(kind: FactKind, field: &str, value: String) -> Result<String, FactError> {
    let value = non_empty(kind, field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(FactError::invalid(
            kind,
            format!("{field} `{value}` contains whitespace"),
        ));
    }
    Ok(value)
}

fn non_empty(kind: FactKind, field: &str, value: String) -> Result<String, FactError> {
    if value.trim().is_empty() {
        return Err(FactError::invalid(kind, format!("{field} is empty")));
    }
    Ok(value)
}

fn optional_identifier(
    kind: FactKind,
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, FactError> {
    value.map(|v| identifier(kind, field, v)).transpose()
}

/// A class, interface or trait declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    name: String,
    kind: ClassKind,
    file_name: Option<String>,
}

impl ClassDecl {
    /// Creates a class fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the name or file name is empty.
    pub fn new(
        name: impl Into<String>,
        kind: ClassKind,
        file_name: Option<String>,
    ) -> Result<Self, FactError> {
        Ok(Self {
            name: identifier(FactKind::Class, "name", name.into())?,
            kind,
            file_name: file_name
                .map(|f| non_empty(FactKind::Class, "file_name", f))
                .transpose()?,
        })
    }

    /// Class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Framework role of the class.
    #[must_use]
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Name of the file declaring the class (e.g. `ArticleController.php`).
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    name: String,
    owner_kind: ClassKind,
    verbs: BTreeSet<HttpVerb>,
}

impl MethodDecl {
    /// Creates a method fact. `verbs` are the HTTP verbs routed to the method.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the name is empty.
    pub fn new(
        name: impl Into<String>,
        owner_kind: ClassKind,
        verbs: impl IntoIterator<Item = HttpVerb>,
    ) -> Result<Self, FactError> {
        Ok(Self {
            name: identifier(FactKind::Method, "name", name.into())?,
            owner_kind,
            verbs: verbs.into_iter().collect(),
        })
    }

    /// Method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the declaring class.
    #[must_use]
    pub fn owner_kind(&self) -> ClassKind {
        self.owner_kind
    }

    /// HTTP verbs routed to this method.
    #[must_use]
    pub fn verbs(&self) -> &BTreeSet<HttpVerb> {
        &self.verbs
    }
}

/// A route definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecl {
    path: String,
    http_verb: HttpVerb,
    name: Option<String>,
    param_names: Vec<String>,
}

impl RouteDecl {
    /// Creates a route fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the path is empty, the verb is
    /// empty or unknown, or the name or a parameter name is empty.
    pub fn new(
        path: impl Into<String>,
        http_verb: &str,
        name: Option<String>,
        param_names: Vec<String>,
    ) -> Result<Self, FactError> {
        let kind = FactKind::Route;
        if http_verb.trim().is_empty() {
            return Err(FactError::invalid(kind, "http verb is empty"));
        }
        let verb = HttpVerb::parse(http_verb)
            .ok_or_else(|| FactError::invalid(kind, format!("unknown http verb `{http_verb}`")))?;
        let param_names = param_names
            .into_iter()
            .map(|p| identifier(kind, "parameter name", p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: non_empty(kind, "path", path.into())?,
            http_verb: verb,
            name: optional_identifier(kind, "name", name)?,
            param_names,
        })
    }

    /// URL path as declared (e.g. `articles/{article}`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP verb.
    #[must_use]
    pub fn http_verb(&self) -> HttpVerb {
        self.http_verb
    }

    /// Route name, if the route is named.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Names of the route parameters.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

/// A configuration key inside a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    file: String,
    key: String,
}

impl ConfigEntry {
    /// Creates a config entry fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the file or key is empty.
    pub fn new(file: impl Into<String>, key: impl Into<String>) -> Result<Self, FactError> {
        Ok(Self {
            file: non_empty(FactKind::ConfigEntry, "file", file.into())?,
            key: identifier(FactKind::ConfigEntry, "key", key.into())?,
        })
    }

    /// Config file path (e.g. `config/mail-services.php`).
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Dotted key path (e.g. `mailgun.api_key`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A database migration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    name: String,
    timestamp: Option<String>,
}

impl MigrationFile {
    /// Creates a migration fact. `timestamp` is the timestamp the front-end
    /// recorded for the migration, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the name is empty.
    pub fn new(name: impl Into<String>, timestamp: Option<String>) -> Result<Self, FactError> {
        Ok(Self {
            name: identifier(FactKind::Migration, "name", name.into())?,
            timestamp: optional_identifier(FactKind::Migration, "timestamp", timestamp)?,
        })
    }

    /// File name, with or without extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

/// A view template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFile {
    path: String,
}

impl ViewFile {
    /// Creates a view fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the path is empty.
    pub fn new(path: impl Into<String>) -> Result<Self, FactError> {
        Ok(Self {
            path: non_empty(FactKind::View, "path", path.into())?,
        })
    }

    /// View path (e.g. `resources/views/articles/showFiltered.blade.php`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A database table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDecl {
    name: String,
    model: Option<String>,
    pivot: bool,
}

impl TableDecl {
    /// Creates a table fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the name or model is empty.
    pub fn new(
        name: impl Into<String>,
        model: Option<String>,
        pivot: bool,
    ) -> Result<Self, FactError> {
        Ok(Self {
            name: identifier(FactKind::Table, "name", name.into())?,
            model: optional_identifier(FactKind::Table, "model", model)?,
            pivot,
        })
    }

    /// Table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model backed by this table, when known.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Whether the table is a many-to-many pivot table.
    #[must_use]
    pub fn is_pivot(&self) -> bool {
        self.pivot
    }
}

/// A database column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDecl {
    table: String,
    name: String,
    references: Option<String>,
}

impl ColumnDecl {
    /// Creates a column fact. `references` is the referenced table for
    /// foreign key columns.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the table, name or referenced
    /// table is empty.
    pub fn new(
        table: impl Into<String>,
        name: impl Into<String>,
        references: Option<String>,
    ) -> Result<Self, FactError> {
        Ok(Self {
            table: identifier(FactKind::Column, "table", table.into())?,
            name: identifier(FactKind::Column, "name", name.into())?,
            references: optional_identifier(FactKind::Column, "references", references)?,
        })
    }

    /// Owning table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Referenced table for foreign keys.
    #[must_use]
    pub fn references(&self) -> Option<&str> {
        self.references.as_deref()
    }
}

/// A relation declared on a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDecl {
    model: String,
    related: String,
    relation: RelationKind,
    table: Option<String>,
    foreign_key: Option<String>,
}

impl RelationDecl {
    /// Creates a relation fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if a model name is empty, or if a
    /// pivot table is given for anything but `BelongsToMany`.
    pub fn new(
        model: impl Into<String>,
        related: impl Into<String>,
        relation: RelationKind,
        table: Option<String>,
        foreign_key: Option<String>,
    ) -> Result<Self, FactError> {
        let kind = FactKind::Relation;
        if table.is_some() && relation != RelationKind::BelongsToMany {
            return Err(FactError::invalid(
                kind,
                "only belongs-to-many relations declare a pivot table",
            ));
        }
        Ok(Self {
            model: identifier(kind, "model", model.into())?,
            related: identifier(kind, "related", related.into())?,
            relation,
            table: optional_identifier(kind, "table", table)?,
            foreign_key: optional_identifier(kind, "foreign_key", foreign_key)?,
        })
    }

    /// Declaring model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Related model.
    #[must_use]
    pub fn related(&self) -> &str {
        &self.related
    }

    /// Relation kind.
    #[must_use]
    pub fn relation(&self) -> RelationKind {
        self.relation
    }

    /// Explicit pivot table name.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Explicit foreign key column.
    #[must_use]
    pub fn foreign_key(&self) -> Option<&str> {
        self.foreign_key.as_deref()
    }
}

/// A console command registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDecl {
    name: String,
}

impl CommandDecl {
    /// Creates a command fact from the command's invocation name.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, FactError> {
        Ok(Self {
            name: identifier(FactKind::Command, "name", name.into())?,
        })
    }

    /// Invocation name (e.g. `app:delete-old-records`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A validation rule identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRuleRef {
    identifier: String,
}

impl ValidationRuleRef {
    /// Creates a validation rule fact.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if the identifier is empty.
    pub fn new(identifier_name: impl Into<String>) -> Result<Self, FactError> {
        Ok(Self {
            identifier: identifier(FactKind::ValidationRule, "identifier", identifier_name.into())?,
        })
    }

    /// Rule identifier (e.g. `required_with`).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Composite fact: a pivot table joined with both of its models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotTable {
    first_model: String,
    second_model: String,
    table: String,
}

impl PivotTable {
    /// Creates a pivot table composite.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if any name is empty.
    pub fn new(
        first_model: impl Into<String>,
        second_model: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, FactError> {
        let kind = FactKind::PivotTable;
        Ok(Self {
            first_model: identifier(kind, "first_model", first_model.into())?,
            second_model: identifier(kind, "second_model", second_model.into())?,
            table: identifier(kind, "table", table.into())?,
        })
    }

    /// Both model names, in the order they were joined.
    #[must_use]
    pub fn models(&self) -> (&str, &str) {
        (&self.first_model, &self.second_model)
    }

    /// Pivot table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }
}

/// Composite fact: a foreign key column joined with its referenced model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    table: String,
    column: String,
    referenced_model: String,
}

impl ForeignKeyRef {
    /// Creates a foreign key composite.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::InvalidFact`] if any name is empty.
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        referenced_model: impl Into<String>,
    ) -> Result<Self, FactError> {
        let kind = FactKind::ForeignKey;
        Ok(Self {
            table: identifier(kind, "table", table.into())?,
            column: identifier(kind, "column", column.into())?,
            referenced_model: identifier(kind, "referenced_model", referenced_model.into())?,
        })
    }

    /// Table holding the foreign key.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Foreign key column.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Model the key points to.
    #[must_use]
    pub fn referenced_model(&self) -> &str {
        &self.referenced_model
    }
}

/// Payload of a [`Fact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactData {
    /// See [`ClassDecl`].
    Class(ClassDecl),
    /// See [`MethodDecl`].
    Method(MethodDecl),
    /// See [`RouteDecl`].
    Route(RouteDecl),
    /// See [`ConfigEntry`].
    ConfigEntry(ConfigEntry),
    /// See [`MigrationFile`].
    Migration(MigrationFile),
    /// See [`ViewFile`].
    View(ViewFile),
    /// See [`TableDecl`].
    Table(TableDecl),
    /// See [`ColumnDecl`].
    Column(ColumnDecl),
    /// See [`RelationDecl`].
    Relation(RelationDecl),
    /// See [`CommandDecl`].
    Command(CommandDecl),
    /// See [`ValidationRuleRef`].
    ValidationRule(ValidationRuleRef),
    /// See [`PivotTable`].
    PivotTable(PivotTable),
    /// See [`ForeignKeyRef`].
    ForeignKey(ForeignKeyRef),
}

/// A structural observation about the codebase at a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    location: Location,
    data: FactData,
}

macro_rules! fact_payloads {
    ($($variant:ident($payload:ident) => $accessor:ident),* $(,)?) => {
        $(
            impl From<$payload> for FactData {
                fn from(payload: $payload) -> Self {
                    Self::$variant(payload)
                }
            }
        )*

        impl FactData {
            /// Returns the kind of this payload.
            #[must_use]
            pub fn kind(&self) -> FactKind {
                match self {
                    $(Self::$variant(_) => FactKind::$variant,)*
                }
            }
        }

        impl Fact {
            $(
                #[doc = concat!("Returns the payload if this is a `", stringify!($variant), "` fact.")]
                #[must_use]
                pub fn $accessor(&self) -> Option<&$payload> {
                    match &self.data {
                        FactData::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            )*
        }
    };
}

fact_payloads! {
    Class(ClassDecl) => as_class,
    Method(MethodDecl) => as_method,
    Route(RouteDecl) => as_route,
    ConfigEntry(ConfigEntry) => as_config_entry,
    Migration(MigrationFile) => as_migration,
    View(ViewFile) => as_view,
    Table(TableDecl) => as_table,
    Column(ColumnDecl) => as_column,
    Relation(RelationDecl) => as_relation,
    Command(CommandDecl) => as_command,
    ValidationRule(ValidationRuleRef) => as_validation_rule,
    PivotTable(PivotTable) => as_pivot_table,
    ForeignKey(ForeignKeyRef) => as_foreign_key,
}

impl Fact {
    /// Creates a fact at the given location.
    #[must_use]
    pub fn new(location: Location, data: impl Into<FactData>) -> Self {
        Self {
            location,
            data: data.into(),
        }
    }

    /// Location the fact was observed at.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The fact payload.
    #[must_use]
    pub fn data(&self) -> &FactData {
        &self.data
    }

    /// Kind of the fact.
    #[must_use]
    pub fn kind(&self) -> FactKind {
        self.data.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_rejects_empty_verb() {
        let err = RouteDecl::new("articles", "  ", None, vec![]).unwrap_err();
        assert_eq!(
            err,
            FactError::InvalidFact {
                kind: FactKind::Route,
                reason: "http verb is empty".to_string(),
            }
        );
    }

    #[test]
    fn route_rejects_unknown_verb() {
        let err = RouteDecl::new("articles", "FETCH", None, vec![]).unwrap_err();
        assert!(err.to_string().contains("unknown http verb `FETCH`"));
    }

    #[test]
    fn route_parses_verb_case_insensitively() {
        let route = RouteDecl::new("articles", "post", Some("articles.store".into()), vec![])
            .expect("valid route");
        assert_eq!(route.http_verb(), HttpVerb::Post);
        assert_eq!(route.name(), Some("articles.store"));
    }

    #[test]
    fn class_rejects_blank_and_spaced_names() {
        assert!(ClassDecl::new("", ClassKind::Model, None).is_err());
        assert!(ClassDecl::new("User Profile", ClassKind::Model, None).is_err());
        assert!(ClassDecl::new("User", ClassKind::Model, Some(String::new())).is_err());
    }

    #[test]
    fn relation_table_only_for_many_to_many() {
        let err = RelationDecl::new(
            "Comment",
            "Article",
            RelationKind::BelongsTo,
            Some("article_comment".into()),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FactError::InvalidFact {
                kind: FactKind::Relation,
                ..
            }
        ));
    }

    #[test]
    fn fact_kind_and_accessors() {
        let fact = Fact::new(
            Location::new("app/Models/User.php", 3, 1),
            ClassDecl::new("User", ClassKind::Model, None).expect("valid class"),
        );
        assert_eq!(fact.kind(), FactKind::Class);
        assert_eq!(fact.as_class().map(ClassDecl::name), Some("User"));
        assert!(fact.as_route().is_none());
    }

    #[test]
    fn composite_kinds() {
        let composites: Vec<FactKind> = FactKind::ALL
            .into_iter()
            .filter(|k| k.is_composite())
            .collect();
        assert_eq!(composites, vec![FactKind::PivotTable, FactKind::ForeignKey]);
        assert_eq!(FactKind::ConfigEntry.to_string(), "config-entry");
    }
}
