//! Query execution integration tests.
//!
//! Cover outcome classification, the stale-table-list rule, and error
//! surfacing through a loaded session.

use db_peek::engine::{Engine, SqliteEngine, Value};
use db_peek::error::PeekError;
use db_peek::query::QueryOutcome;
use db_peek::session::{DisplayState, Session};

/// Builds a database image by running the given statements on an empty
/// in-memory engine and serializing it.
fn image_with(statements: &[&str]) -> Vec<u8> {
    let engine = SqliteEngine::from_bytes(&[]).unwrap();
    for sql in statements {
        engine.run(sql).unwrap();
    }
    engine.serialize().unwrap()
}

fn loaded_session() -> Session {
    let mut session = Session::new();
    session
        .load_from_bytes(&image_with(&[
            "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, score REAL, avatar BLOB)",
            "INSERT INTO users VALUES (1, 'Alice', 9.5, x'c0ffee')",
            "INSERT INTO users VALUES (2, NULL, NULL, NULL)",
        ]))
        .unwrap();
    session
}

#[test]
fn test_select_rows_shape_is_consistent() {
    let mut session = loaded_session();

    let outcome = session.execute("SELECT * FROM users").unwrap().unwrap();
    let QueryOutcome::Rows(set) = outcome else {
        panic!("Expected Rows outcome");
    };

    assert_eq!(set.columns, vec!["id", "name", "score", "avatar"]);
    assert_eq!(set.row_count(), 2);
    for row in &set.rows {
        assert_eq!(row.len(), set.columns.len());
    }
}

#[test]
fn test_storage_classes_come_through() {
    let mut session = loaded_session();

    let outcome = session
        .execute("SELECT id, name, score, avatar FROM users WHERE id = 1")
        .unwrap()
        .unwrap();
    let QueryOutcome::Rows(set) = outcome else {
        panic!("Expected Rows outcome");
    };

    assert_eq!(
        set.rows[0],
        vec![
            Value::Integer(1),
            Value::Text("Alice".to_string()),
            Value::Real(9.5),
            Value::Blob(vec![0xc0, 0xff, 0xee]),
        ]
    );

    let outcome = session
        .execute("SELECT name FROM users WHERE id = 2")
        .unwrap()
        .unwrap();
    let QueryOutcome::Rows(set) = outcome else {
        panic!("Expected Rows outcome");
    };
    assert_eq!(set.rows[0], vec![Value::Null]);
}

#[test]
fn test_create_table_is_empty_not_error_and_tables_stay_stale() {
    let mut session = loaded_session();

    let outcome = session.execute("CREATE TABLE x (id INT)").unwrap();
    assert!(matches!(outcome, Some(QueryOutcome::Empty)));

    // The table list only changes on reload.
    assert!(!session.tables().contains(&"x".to_string()));

    let image = session.export_bytes().unwrap();
    session.load_from_bytes(&image).unwrap();
    assert!(session.tables().contains(&"x".to_string()));
}

#[test]
fn test_zero_row_select_is_empty_outcome() {
    let mut session = loaded_session();

    let outcome = session
        .execute("SELECT * FROM users WHERE id = 999")
        .unwrap();
    assert!(matches!(outcome, Some(QueryOutcome::Empty)));
}

#[test]
fn test_missing_table_reports_error_and_keeps_last_result() {
    let mut session = loaded_session();
    session.execute("SELECT * FROM users").unwrap();

    let err = session.execute("SELECT * FROM nonexistent").unwrap_err();
    let PeekError::Query(msg) = err else {
        panic!("Expected Query error");
    };
    assert!(!msg.is_empty());

    // The prior result survives in state but the error takes the display.
    assert!(session.last_result().is_some());
    match session.display() {
        DisplayState::Error(shown) => assert_eq!(shown, msg),
        other => panic!("Expected Error display, got {other:?}"),
    }
}

#[test]
fn test_writes_mutate_the_live_buffer() {
    let mut session = loaded_session();

    let outcome = session
        .execute("UPDATE users SET name = 'Carol' WHERE id = 1")
        .unwrap();
    assert!(matches!(outcome, Some(QueryOutcome::Empty)));

    let outcome = session
        .execute("SELECT name FROM users WHERE id = 1")
        .unwrap()
        .unwrap();
    let QueryOutcome::Rows(set) = outcome else {
        panic!("Expected Rows outcome");
    };
    assert_eq!(set.rows[0], vec![Value::Text("Carol".to_string())]);
}
