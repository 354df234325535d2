//! Tests for Store list operations
//!
//! These tests verify:
//! - Create/add/extend preserve order
//! - Positional get/pop/append and range checks
//! - Length and deletion
//! - Type mismatches leave the store untouched

use std::fs;

use jsonkv::{Config, JsonKvError, Kind, Store, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .path(temp_dir.path().join("lists.json"))
        .build();
    let store = Store::open(config).unwrap();
    (temp_dir, store)
}

fn setup_abc(store: &mut Store) {
    store.list_create("l").unwrap();
    store.list_extend("l", vec!["a", "b", "c"]).unwrap();
}

fn reload(store: &Store) -> Store {
    Store::open(store.config().clone()).unwrap()
}

// =============================================================================
// Create / Add / Extend Tests
// =============================================================================

#[test]
fn test_list_add_preserves_order() {
    let (_temp, mut store) = setup_temp_store();

    store.list_create("l").unwrap();
    store.list_add("l", "a").unwrap();
    store.list_add("l", "b").unwrap();

    assert_eq!(
        store.list_get_all("l").unwrap(),
        &[Value::from("a"), Value::from("b")]
    );
}

#[test]
fn test_list_create_is_empty_and_persisted() {
    let (_temp, mut store) = setup_temp_store();

    store.list_create("l").unwrap();

    assert_eq!(store.list_len("l").unwrap(), 0);
    assert_eq!(reload(&store).list_len("l").unwrap(), 0);
}

#[test]
fn test_list_create_resets_existing_list() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    store.list_create("l").unwrap();

    assert!(store.list_get_all("l").unwrap().is_empty());
}

#[test]
fn test_list_extend_appends_each_element() {
    let (_temp, mut store) = setup_temp_store();

    store.list_create("l").unwrap();
    store.list_add("l", 0).unwrap();
    store.list_extend("l", vec![1, 2, 3]).unwrap();

    assert_eq!(store.list_len("l").unwrap(), 4);
    assert_eq!(store.get("l"), Some(&Value::from(vec![0, 1, 2, 3])));
}

#[test]
fn test_list_holds_mixed_values() {
    let (_temp, mut store) = setup_temp_store();

    store.list_create("l").unwrap();
    store.list_add("l", 1).unwrap();
    store.list_add("l", "two").unwrap();
    store.list_add("l", vec![3]).unwrap();

    let reloaded = reload(&store);
    assert_eq!(reloaded.list_get("l", 2).unwrap(), &Value::from(vec![3]));
}

// =============================================================================
// Positional Tests
// =============================================================================

#[test]
fn test_list_get() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    assert_eq!(store.list_get("l", 0).unwrap(), &Value::from("a"));
    assert_eq!(store.list_get("l", 2).unwrap(), &Value::from("c"));
}

#[test]
fn test_list_get_out_of_range() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    let err = store.list_get("l", 5).unwrap_err();

    assert!(matches!(
        err,
        JsonKvError::IndexOutOfRange {
            index: 5,
            len: 3,
            ..
        }
    ));
}

#[test]
fn test_list_pop_shifts_and_persists() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    let popped = store.list_pop("l", 0).unwrap();

    assert_eq!(popped, Value::from("a"));
    assert_eq!(store.get("l"), Some(&Value::from(vec!["b", "c"])));
    assert_eq!(reload(&store).get("l"), Some(&Value::from(vec!["b", "c"])));
}

#[test]
fn test_list_pop_out_of_range_changes_nothing() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    assert!(matches!(
        store.list_pop("l", 3),
        Err(JsonKvError::IndexOutOfRange { .. })
    ));
    assert_eq!(store.list_len("l").unwrap(), 3);
}

#[test]
fn test_list_pop_failed_dump_restores_element() {
    let (temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    // A directory where the temp file goes makes every dump fail
    let blocker = temp.path().join("lists.json.tmp");
    fs::create_dir(&blocker).unwrap();

    assert!(matches!(store.list_pop("l", 0), Err(JsonKvError::Io(_))));
    assert_eq!(store.get("l"), Some(&Value::from(vec!["a", "b", "c"])));

    fs::remove_dir(&blocker).unwrap();
    store.dump().unwrap();
    assert_eq!(
        reload(&store).get("l"),
        Some(&Value::from(vec!["a", "b", "c"]))
    );
}

#[test]
fn test_list_append_to_element() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    store.list_append("l", 1, "ee").unwrap();

    assert_eq!(store.list_get("l", 1).unwrap(), &Value::from("bee"));
    assert_eq!(reload(&store).list_get("l", 1).unwrap(), &Value::from("bee"));
}

#[test]
fn test_list_append_to_non_text_element() {
    let (_temp, mut store) = setup_temp_store();

    store.list_create("l").unwrap();
    store.list_add("l", 7).unwrap();

    let err = store.list_append("l", 0, "x").unwrap_err();

    match err {
        JsonKvError::ElementMismatch {
            key,
            index,
            expected,
            found,
        } => {
            assert_eq!(key, "l");
            assert_eq!(index, 0);
            assert_eq!(expected, Kind::Text);
            assert_eq!(found, Kind::Integer);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_list_append_out_of_range() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    assert!(matches!(
        store.list_append("l", 9, "x"),
        Err(JsonKvError::IndexOutOfRange { index: 9, .. })
    ));
}

#[test]
fn test_list_exists() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    assert!(store.list_exists("l", &Value::from("b")).unwrap());
    assert!(!store.list_exists("l", &Value::from("z")).unwrap());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_list_del_returns_length() {
    let (_temp, mut store) = setup_temp_store();
    setup_abc(&mut store);

    assert_eq!(store.list_del("l").unwrap(), 3);
    assert_eq!(store.get("l"), None);
    assert_eq!(reload(&store).get("l"), None);
}

// =============================================================================
// Type Mismatch Tests
// =============================================================================

#[test]
fn test_list_add_on_text_key() {
    let (_temp, mut store) = setup_temp_store();

    store.set("t", "text").unwrap();
    let err = store.list_add("t", "a").unwrap_err();

    assert!(matches!(
        err,
        JsonKvError::TypeMismatch {
            expected: Kind::List,
            found: Kind::Text,
            ..
        }
    ));
    assert_eq!(store.get("t"), Some(&Value::from("text")));
    assert_eq!(reload(&store).get("t"), Some(&Value::from("text")));
}

#[test]
fn test_list_ops_on_absent_key() {
    let (_temp, mut store) = setup_temp_store();

    assert!(store.list_add("missing", 1).is_err());
    assert!(store.list_get_all("missing").is_err());
    assert!(store.list_len("missing").is_err());
    assert!(store.list_del("missing").is_err());
    assert_eq!(store.get("missing"), None);
}

#[test]
fn test_list_create_on_dict_key() {
    let (_temp, mut store) = setup_temp_store();

    store.dict_create("d").unwrap();

    assert!(matches!(
        store.list_create("d"),
        Err(JsonKvError::TypeMismatch {
            found: Kind::Dict,
            ..
        })
    ));
    assert!(store.dict_get_all("d").is_ok());
}

#[test]
fn test_list_create_on_text_key() {
    let (_temp, mut store) = setup_temp_store();

    store.set("t", "text").unwrap();

    assert!(matches!(
        store.list_create("t"),
        Err(JsonKvError::TypeMismatch {
            expected: Kind::List,
            found: Kind::Text,
            ..
        })
    ));
    assert_eq!(store.get("t"), Some(&Value::from("text")));
}
