//! Session lifecycle integration tests.
//!
//! Cover the load/replace semantics: all-or-nothing loads, failed loads
//! leaving the previous session usable, and operations gated on a load.

use db_peek::engine::{Engine, SqliteEngine};
use db_peek::error::PeekError;
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

fn image_a() -> Vec<u8> {
    image_with(&[
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)",
        "INSERT INTO users VALUES (1, 'Alice')",
        "CREATE TABLE orders (id INTEGER PRIMARY KEY)",
    ])
}

#[test]
fn test_load_then_tables_matches_image() {
    let mut session = Session::new();
    let snapshot = session.load_from_bytes(&image_a()).unwrap();

    assert_eq!(snapshot.tables, vec!["users", "orders"]);
    assert_eq!(session.tables(), ["users", "orders"]);
}

#[test]
fn test_invalid_bytes_leave_prior_session_unchanged() {
    let mut session = Session::new();
    session.load_from_bytes(&image_a()).unwrap();
    session.execute("SELECT * FROM users").unwrap();

    let err = session
        .load_from_bytes(b"Lorem ipsum dolor sit amet, not a database")
        .unwrap_err();
    assert!(matches!(err, PeekError::Load(_)));

    // Database A is still the active session.
    assert_eq!(session.tables(), ["users", "orders"]);
    assert!(session.last_result().is_some());
    assert!(session.execute("SELECT name FROM users").is_ok());
}

#[test]
fn test_operations_before_any_load_fail_with_no_active_session() {
    let mut session = Session::new();

    assert!(matches!(
        session.execute("SELECT 1"),
        Err(PeekError::NoActiveSession)
    ));
    assert!(matches!(
        session.export_bytes(),
        Err(PeekError::NoActiveSession)
    ));
}

#[test]
fn test_blank_statements_are_noops() {
    let mut session = Session::new();
    session.load_from_bytes(&image_a()).unwrap();
    session.execute("SELECT * FROM users").unwrap();

    assert!(session.execute("").unwrap().is_none());
    assert!(session.execute("   ").unwrap().is_none());

    // Nothing was replaced or cleared.
    assert!(session.last_result().is_some());
    assert!(session.last_error().is_none());
}

#[test]
fn test_reload_replaces_whole_session() {
    let mut session = Session::new();
    session.load_from_bytes(&image_a()).unwrap();
    session.execute("SELECT * FROM users").unwrap();

    let image_b = image_with(&["CREATE TABLE products (sku TEXT)"]);
    session.load_from_bytes(&image_b).unwrap();

    assert_eq!(session.tables(), ["products"]);
    assert!(session.last_result().is_none());
    assert!(session.last_error().is_none());
}

#[test]
fn test_independent_sessions_do_not_share_state() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.load_from_bytes(&image_a()).unwrap();
    second
        .load_from_bytes(&image_with(&["CREATE TABLE logs (line TEXT)"]))
        .unwrap();

    first.execute("INSERT INTO users VALUES (2, 'Bob')").unwrap();

    assert_eq!(first.tables(), ["users", "orders"]);
    assert_eq!(second.tables(), ["logs"]);
    assert!(second.last_result().is_none());
}
