//! Integration test: facts document → validated facts → composite join.
//!
//! Uses the fixture under `tests/fixtures/project.json`.

use convention_lint_core::{
    join_composites, load_facts_from_file, FactKind, InputError, Location, RecordError,
};
use std::path::{Path, PathBuf};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project.json")
}

#[test]
fn loads_fixture_and_rejects_route_without_verb() {
    let batch = load_facts_from_file(&fixture()).expect("fixture should load");

    assert_eq!(batch.facts.len(), 17);
    assert_eq!(batch.rejected.len(), 1);

    let rejected = &batch.rejected[0];
    assert_eq!(rejected.location, Some(Location::new("routes/web.php", 7, 1)));
    assert!(matches!(rejected.error, RecordError::Invalid(_)));
    assert!(rejected.to_string().contains("http verb is empty"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_facts_from_file(Path::new("tests/fixtures/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn fixture_joins_into_one_pivot_and_one_foreign_key() {
    let batch = load_facts_from_file(&fixture()).expect("fixture should load");
    let composites = join_composites(&batch.facts);

    let kinds: Vec<FactKind> = composites.iter().map(|f| f.kind()).collect();
    assert_eq!(kinds, vec![FactKind::PivotTable, FactKind::ForeignKey]);

    let pivot = composites[0].as_pivot_table().expect("pivot composite");
    assert_eq!(pivot.models(), ("Article", "User"));
    assert_eq!(pivot.table(), "users_articles");
    assert_eq!(
        composites[0].location(),
        &Location::new("app/Models/Article.php", 15, 5)
    );

    let fk = composites[1].as_foreign_key().expect("foreign key composite");
    assert_eq!(fk.table(), "comments");
    assert_eq!(fk.column(), "articles_id");
    assert_eq!(fk.referenced_model(), "Article");
}
