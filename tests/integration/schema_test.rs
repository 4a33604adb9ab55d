//! Schema introspection integration tests.

use db_peek::engine::{Engine, SqliteEngine};
use db_peek::session::Session;

/// Builds a database image by running the given statements on an empty
/// in-memory engine and serializing it.
fn image_with(statements: &[&str]) -> Vec<u8> {
    let engine = SqliteEngine::from_bytes(&[]).unwrap();
    for sql in statements {
        engine.run(sql).unwrap();
    }
    engine.serialize().unwrap()
}

#[test]
fn test_tables_preserve_catalog_order() {
    let mut session = Session::new();
    session
        .load_from_bytes(&image_with(&[
            "CREATE TABLE zebra (id INTEGER)",
            "CREATE TABLE apple (id INTEGER)",
            "CREATE TABLE mango (id INTEGER)",
        ]))
        .unwrap();

    // Creation order, not alphabetical.
    assert_eq!(session.tables(), ["zebra", "apple", "mango"]);
}

#[test]
fn test_empty_database_is_valid() {
    let mut session = Session::new();
    let snapshot = session.load_from_bytes(&image_with(&[])).unwrap();

    assert!(snapshot.tables.is_empty());
    assert!(session.is_loaded());
    assert!(session.tables().is_empty());
}

#[test]
fn test_views_are_not_listed() {
    let mut session = Session::new();
    session
        .load_from_bytes(&image_with(&[
            "CREATE TABLE t (id INTEGER)",
            "CREATE VIEW v AS SELECT id FROM t",
        ]))
        .unwrap();

    assert_eq!(session.tables(), ["t"]);
}

#[test]
fn test_internal_autoincrement_table_is_listed() {
    // The catalog query is `type='table'` with no name filtering, so
    // SQLite's own sqlite_sequence bookkeeping table shows up once an
    // AUTOINCREMENT table exists.
    let mut session = Session::new();
    session
        .load_from_bytes(&image_with(&[
            "CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT)",
        ]))
        .unwrap();

    assert!(session.tables().contains(&"t".to_string()));
    assert!(session.tables().contains(&"sqlite_sequence".to_string()));
}
