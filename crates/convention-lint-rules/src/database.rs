//! Database naming rules: tables, columns, pivot tables, and foreign keys.
//!
//! Pivot table and foreign key rules check composite facts produced by the
//! composite join, so each rule still sees exactly one fact.
//!
//! # Good Patterns
//!
//! ```text
//! users, blog_posts          // plural snake_case tables
//! article_user               // pivot: singular models, alphabetical
//! article_id                 // foreign key: singular model + `_id`
//! users.name                 // no `user_` prefix on the users table
//! ```

use convention_lint_core::utils::{is_snake_case, plural_snake, singular_snake, to_snake_case};
use convention_lint_core::{
    ColumnDecl, Fact, FactKind, Finding, ForeignKeyRef, PivotTable, Rule, RuleError, Severity,
    TableDecl, Verdict,
};

fn table_of(fact: &Fact) -> Result<&TableDecl, RuleError> {
    fact.as_table()
        .ok_or_else(|| RuleError::unexpected(FactKind::Table, fact))
}

fn column_of(fact: &Fact) -> Result<&ColumnDecl, RuleError> {
    fact.as_column()
        .ok_or_else(|| RuleError::unexpected(FactKind::Column, fact))
}

/// Table names are plural `snake_case`. Pivot tables are checked by
/// [`PivotTableName`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableName;

impl TableName {
    /// Rule code.
    pub const CODE: &'static str = "CL030";
    /// Rule id.
    pub const NAME: &'static str = "table-name";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TableName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Table names are plural snake_case"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Table
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let table = table_of(fact)?;
        if table.is_pivot() {
            return Ok(Verdict::Pass);
        }

        let name = table.name();
        let expected = plural_snake(name);
        if expected == name {
            return Ok(Verdict::Pass);
        }
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Table names must be plural snake_case: expected `{expected}`"
            ))
            .with_fix(expected),
        ))
    }
}

/// Column names are `snake_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnSnakeCase;

impl ColumnSnakeCase {
    /// Rule code.
    pub const CODE: &'static str = "CL031";
    /// Rule id.
    pub const NAME: &'static str = "column-snake-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ColumnSnakeCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Column names are snake_case"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Column
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let name = column_of(fact)?.name();
        if is_snake_case(name) {
            return Ok(Verdict::Pass);
        }

        let expected = to_snake_case(name);
        Ok(Verdict::Violation(
            Finding::new(format!("Column names must be snake_case: expected `{expected}`"))
                .with_fix(expected),
        ))
    }
}

/// Columns do not repeat the model name of their table (`users.user_name`).
///
/// Foreign key columns and `<model>_id` are exempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnModelPrefix;

impl ColumnModelPrefix {
    /// Rule code.
    pub const CODE: &'static str = "CL032";
    /// Rule id.
    pub const NAME: &'static str = "column-model-prefix";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ColumnModelPrefix {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Column names do not repeat the model name of their table"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Column
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let column = column_of(fact)?;
        if column.references().is_some() {
            return Ok(Verdict::Pass);
        }

        let prefix = format!("{}_", singular_snake(column.table()));
        match column.name().strip_prefix(&prefix) {
            Some(rest) if !rest.is_empty() && rest != "id" => Ok(Verdict::Violation(
                Finding::new(format!(
                    "Column `{}` repeats the model name of table `{}`: expected `{rest}`",
                    column.name(),
                    column.table()
                ))
                .with_fix(rest),
            )),
            _ => Ok(Verdict::Pass),
        }
    }
}

/// Pivot tables are the two singular model names, in alphabetical order,
/// joined by `_` (`article_user`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PivotTableName;

impl PivotTableName {
    /// Rule code.
    pub const CODE: &'static str = "CL033";
    /// Rule id.
    pub const NAME: &'static str = "pivot-table-name";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Conventional pivot table name for two models.
    #[must_use]
    pub fn expected_name(first: &str, second: &str) -> String {
        let mut parts = [singular_snake(first), singular_snake(second)];
        parts.sort();
        parts.join("_")
    }
}

impl Rule for PivotTableName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Pivot tables are two singular model names in alphabetical order"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::PivotTable
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let pivot: &PivotTable = fact
            .as_pivot_table()
            .ok_or_else(|| RuleError::unexpected(FactKind::PivotTable, fact))?;

        let (first, second) = pivot.models();
        let expected = Self::expected_name(first, second);
        if pivot.table() == expected {
            return Ok(Verdict::Pass);
        }
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Pivot table names must be singular model names in alphabetical order: expected `{expected}`"
            ))
            .with_fix(expected),
        ))
    }
}

/// Foreign key columns are the singular referenced model name plus `_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForeignKeyName;

impl ForeignKeyName {
    /// Rule code.
    pub const CODE: &'static str = "CL034";
    /// Rule id.
    pub const NAME: &'static str = "foreign-key-name";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ForeignKeyName {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Foreign keys are the singular referenced model name plus `_id`"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::ForeignKey
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let fk: &ForeignKeyRef = fact
            .as_foreign_key()
            .ok_or_else(|| RuleError::unexpected(FactKind::ForeignKey, fact))?;

        let expected = format!("{}_id", singular_snake(fk.referenced_model()));
        if fk.column() == expected {
            return Ok(Verdict::Pass);
        }
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Foreign key `{}.{}` must be named after model `{}`: expected `{expected}`",
                fk.table(),
                fk.column(),
                fk.referenced_model()
            ))
            .with_fix(expected),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Location;

    fn at() -> Location {
        Location::new("database/schema.sql", 10, 1)
    }

    fn table(name: &str, pivot: bool) -> Fact {
        Fact::new(at(), TableDecl::new(name, None, pivot).unwrap())
    }

    fn column(table: &str, name: &str, references: Option<&str>) -> Fact {
        Fact::new(
            at(),
            ColumnDecl::new(table, name, references.map(Into::into)).unwrap(),
        )
    }

    fn fix(verdict: Verdict) -> Option<String> {
        match verdict {
            Verdict::Violation(finding) => finding.fix,
            Verdict::Pass => panic!("expected a violation"),
        }
    }

    #[test]
    fn table_names_are_plural_snake_case() {
        let rule = TableName::new();
        for name in ["users", "blog_posts", "people", "categories", "news", "addresses"] {
            assert!(rule.check(&table(name, false)).unwrap().is_pass(), "{name}");
        }
        assert_eq!(fix(rule.check(&table("user", false)).unwrap()).as_deref(), Some("users"));
        assert_eq!(
            fix(rule.check(&table("BlogPost", false)).unwrap()).as_deref(),
            Some("blog_posts")
        );
        assert!(rule.check(&table("article_user", true)).unwrap().is_pass());
    }

    #[test]
    fn column_names_are_snake_case() {
        let rule = ColumnSnakeCase::new();
        assert!(rule.check(&column("users", "created_at", None)).unwrap().is_pass());
        assert_eq!(
            fix(rule.check(&column("users", "firstName", None)).unwrap()).as_deref(),
            Some("first_name")
        );
    }

    #[test]
    fn model_prefix_is_flagged() {
        let rule = ColumnModelPrefix::new();
        assert_eq!(
            fix(rule.check(&column("articles", "article_title", None)).unwrap()).as_deref(),
            Some("title")
        );
        assert!(rule.check(&column("articles", "title", None)).unwrap().is_pass());
        assert!(rule.check(&column("users", "user_id", None)).unwrap().is_pass());
        assert!(rule
            .check(&column("articles", "article_parent", Some("articles")))
            .unwrap()
            .is_pass());
    }

    #[test]
    fn pivot_table_example() {
        let fact = Fact::new(at(), PivotTable::new("Article", "User", "users_articles").unwrap());
        let verdict = PivotTableName::new().check(&fact).unwrap();
        let Verdict::Violation(finding) = verdict else {
            panic!("expected a violation");
        };
        assert_eq!(finding.fix.as_deref(), Some("article_user"));
        assert!(finding.message.contains("alphabetical order"));

        let ok = Fact::new(at(), PivotTable::new("Article", "User", "article_user").unwrap());
        assert!(PivotTableName::new().check(&ok).unwrap().is_pass());
    }

    #[test]
    fn pivot_name_sorts_snake_forms() {
        assert_eq!(PivotTableName::expected_name("User", "BlogPost"), "blog_post_user");
        assert_eq!(PivotTableName::expected_name("Roles", "User"), "role_user");
    }

    #[test]
    fn foreign_keys_use_singular_model() {
        let rule = ForeignKeyName::new();
        let ok = Fact::new(at(), ForeignKeyRef::new("comments", "article_id", "Article").unwrap());
        assert!(rule.check(&ok).unwrap().is_pass());

        for bad in ["articles_id", "ArticleId", "id_article"] {
            let fact = Fact::new(at(), ForeignKeyRef::new("comments", bad, "Article").unwrap());
            assert_eq!(fix(rule.check(&fact).unwrap()).as_deref(), Some("article_id"), "{bad}");
        }

        let compound =
            Fact::new(at(), ForeignKeyRef::new("comments", "blog_post_id", "BlogPost").unwrap());
        assert!(rule.check(&compound).unwrap().is_pass());

        let canvas = Fact::new(at(), ForeignKeyRef::new("layers", "canvas_id", "Canvas").unwrap());
        assert!(rule.check(&canvas).unwrap().is_pass());
    }
}
