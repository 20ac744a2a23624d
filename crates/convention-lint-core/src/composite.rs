//! Pre-aggregation pass that joins related facts into composite facts.
//!
//! Pivot table and foreign key conventions relate two names that come from
//! different facts. Instead of letting rules query a global index, this pass
//! joins them once, after all facts of a project are available, and emits
//! [`PivotTable`] and [`ForeignKeyRef`] facts that rules check in isolation.
//!
//! The join is order-independent: permuting the input yields the same
//! composites, each located at the smallest contributing location.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::fact::{ClassKind, Fact, FactData, FactError, ForeignKeyRef, PivotTable, RelationKind};
use crate::types::Location;
use crate::utils::{plural_snake, singular_pascal};

/// Maps between model names and table names declared in a project.
#[derive(Debug, Default)]
struct ModelIndex {
    table_to_model: BTreeMap<String, String>,
    model_to_table: BTreeMap<String, String>,
}

impl ModelIndex {
    fn build(facts: &[Fact]) -> Self {
        let mut index = Self::default();

        // Explicit table declarations take precedence over conventional names.
        for fact in facts {
            if let Some(table) = fact.as_table() {
                if let Some(model) = table.model() {
                    insert_min(&mut index.table_to_model, table.name(), model);
                    insert_min(&mut index.model_to_table, model, table.name());
                }
            }
        }

        for fact in facts {
            if let Some(class) = fact.as_class() {
                if class.kind() == ClassKind::Model {
                    let table = plural_snake(class.name());
                    if !index.model_to_table.contains_key(class.name()) {
                        insert_min(&mut index.table_to_model, &table, class.name());
                    }
                }
            }
        }

        index
    }

    fn model_for(&self, table: &str) -> String {
        self.table_to_model
            .get(table)
            .cloned()
            .unwrap_or_else(|| singular_pascal(table))
    }

    fn table_for(&self, model: &str) -> String {
        self.model_to_table
            .get(model)
            .cloned()
            .unwrap_or_else(|| plural_snake(model))
    }
}

/// Inserts `value`, keeping the smallest value on conflict.
fn insert_min(map: &mut BTreeMap<String, String>, key: &str, value: &str) {
    map.entry(key.to_string())
        .and_modify(|existing| {
            if value < existing.as_str() {
                *existing = value.to_string();
            }
        })
        .or_insert_with(|| value.to_string());
}

/// Records `location` for `key`, keeping the smallest location on conflict.
fn record<K: Ord>(map: &mut BTreeMap<K, Location>, key: K, location: &Location) {
    map.entry(key)
        .and_modify(|existing| {
            if *location < *existing {
                *existing = location.clone();
            }
        })
        .or_insert_with(|| location.clone());
}

/// Joins relation, table, column and class facts into composite facts.
///
/// Produces:
/// - one [`PivotTable`] per many-to-many model pair and explicit pivot table
///   (both sides of the relation collapse into one composite);
/// - one [`ForeignKeyRef`] per foreign key column, from columns with a
///   `references` table and from belongs-to relations with an explicit
///   foreign key.
///
/// The output is sorted and contains no duplicates.
#[must_use]
pub fn join_composites(facts: &[Fact]) -> Vec<Fact> {
    let index = ModelIndex::build(facts);
    let mut pivots: BTreeMap<(String, String, String), Location> = BTreeMap::new();
    let mut foreign_keys: BTreeMap<(String, String, String), Location> = BTreeMap::new();

    for fact in facts {
        match fact.data() {
            FactData::Relation(relation) => match relation.relation() {
                RelationKind::BelongsToMany => {
                    let Some(table) = relation.table() else {
                        continue;
                    };
                    let (first, second) = if relation.model() <= relation.related() {
                        (relation.model(), relation.related())
                    } else {
                        (relation.related(), relation.model())
                    };
                    record(
                        &mut pivots,
                        (first.to_string(), second.to_string(), table.to_string()),
                        fact.location(),
                    );
                }
                RelationKind::BelongsTo => {
                    let Some(column) = relation.foreign_key() else {
                        continue;
                    };
                    record(
                        &mut foreign_keys,
                        (
                            index.table_for(relation.model()),
                            column.to_string(),
                            relation.related().to_string(),
                        ),
                        fact.location(),
                    );
                }
                RelationKind::HasOne | RelationKind::HasMany => {}
            },
            FactData::Column(column) => {
                let Some(referenced) = column.references() else {
                    continue;
                };
                record(
                    &mut foreign_keys,
                    (
                        column.table().to_string(),
                        column.name().to_string(),
                        index.model_for(referenced),
                    ),
                    fact.location(),
                );
            }
            _ => {}
        }
    }

    debug!(
        "Joined {} pivot table(s) and {} foreign key(s)",
        pivots.len(),
        foreign_keys.len()
    );

    let pivots = pivots.into_iter().map(|((first, second, table), location)| {
        PivotTable::new(first, second, table).map(|p| Fact::new(location, p))
    });
    let foreign_keys = foreign_keys
        .into_iter()
        .map(|((table, column, model), location)| {
            ForeignKeyRef::new(table, column, model).map(|f| Fact::new(location, f))
        });

    pivots
        .chain(foreign_keys)
        .filter_map(|result: Result<Fact, FactError>| {
            result
                .map_err(|e| warn!("Skipping composite fact: {}", e))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::{ClassDecl, ColumnDecl, RelationDecl, TableDecl};

    fn at(file: &str, line: usize) -> Location {
        Location::new(file, line, 1)
    }

    fn relation(
        model: &str,
        related: &str,
        kind: RelationKind,
        table: Option<&str>,
        fk: Option<&str>,
        line: usize,
    ) -> Fact {
        Fact::new(
            at(&format!("app/Models/{model}.php"), line),
            RelationDecl::new(model, related, kind, table.map(Into::into), fk.map(Into::into))
                .unwrap(),
        )
    }

    #[test]
    fn both_sides_of_many_to_many_collapse() {
        let facts = vec![
            relation("User", "Article", RelationKind::BelongsToMany, Some("users_articles"), None, 20),
            relation("Article", "User", RelationKind::BelongsToMany, Some("users_articles"), None, 12),
        ];

        let composites = join_composites(&facts);
        assert_eq!(composites.len(), 1);
        let pivot = composites[0].as_pivot_table().unwrap();
        assert_eq!(pivot.models(), ("Article", "User"));
        assert_eq!(pivot.table(), "users_articles");
        assert_eq!(composites[0].location(), &at("app/Models/Article.php", 12));
    }

    #[test]
    fn many_to_many_without_table_is_skipped() {
        let facts = vec![relation("User", "Role", RelationKind::BelongsToMany, None, None, 1)];
        assert!(join_composites(&facts).is_empty());
    }

    #[test]
    fn column_reference_resolves_model_through_table_decl() {
        let facts = vec![
            Fact::new(
                at("database/schema.sql", 1),
                TableDecl::new("blog_entries", Some("Post".into()), false).unwrap(),
            ),
            Fact::new(
                at("database/schema.sql", 9),
                ColumnDecl::new("comments", "post_id", Some("blog_entries".into())).unwrap(),
            ),
        ];

        let composites = join_composites(&facts);
        let fk = composites[0].as_foreign_key().unwrap();
        assert_eq!(fk.referenced_model(), "Post");
        assert_eq!(fk.column(), "post_id");
        assert_eq!(fk.table(), "comments");
    }

    #[test]
    fn column_reference_falls_back_to_class_then_singular() {
        let facts = vec![
            Fact::new(
                at("app/Models/Person.php", 3),
                ClassDecl::new("Person", ClassKind::Model, None).unwrap(),
            ),
            Fact::new(
                at("database/schema.sql", 4),
                ColumnDecl::new("posts", "author_id", Some("people".into())).unwrap(),
            ),
            Fact::new(
                at("database/schema.sql", 5),
                ColumnDecl::new("posts", "category_id", Some("categories".into())).unwrap(),
            ),
        ];

        let composites = join_composites(&facts);
        let models: Vec<&str> = composites
            .iter()
            .filter_map(Fact::as_foreign_key)
            .map(ForeignKeyRef::referenced_model)
            .collect();
        assert_eq!(models, vec!["Person", "Category"]);
    }

    #[test]
    fn belongs_to_and_column_for_same_key_dedup() {
        let facts = vec![
            relation("Comment", "Article", RelationKind::BelongsTo, None, Some("article_id"), 15),
            Fact::new(
                at("database/schema.sql", 30),
                ColumnDecl::new("comments", "article_id", Some("articles".into())).unwrap(),
            ),
        ];

        let composites = join_composites(&facts);
        assert_eq!(composites.len(), 1);
        assert_eq!(composites[0].location(), &at("app/Models/Comment.php", 15));
    }

    #[test]
    fn join_is_order_independent() {
        let mut facts = vec![
            relation("User", "Article", RelationKind::BelongsToMany, Some("article_user"), None, 5),
            relation("Comment", "User", RelationKind::BelongsTo, None, Some("UserId"), 8),
            Fact::new(
                at("database/schema.sql", 2),
                ColumnDecl::new("articles", "author", Some("users".into())).unwrap(),
            ),
        ];
        let forward = join_composites(&facts);
        facts.reverse();
        assert_eq!(join_composites(&facts), forward);
    }
}
