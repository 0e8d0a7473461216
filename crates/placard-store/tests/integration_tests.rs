//! Integration tests for placard-store
//!
//! These tests verify the full insert/lookup cycle and the duplicate-code
//! behavior that the registry's retry loop depends on.

use placard_domain::traits::{InsertOutcome, RecordStore};
use placard_domain::{RecordCode, RecordDraft, VehicleRecord};
use placard_store::SqliteStore;

fn sample_record(code: &str) -> VehicleRecord {
    let draft = RecordDraft {
        plate: "ABC-1234".to_string(),
        vehicle_type: "AUTOMOVIL".to_string(),
        brand: "TOYOTA".to_string(),
        model: "COROLLA".to_string(),
        color: "ROJO".to_string(),
        year: "2020".to_string(),
        chassis: "1HGBH41JXMN109186".to_string(),
        expiration_date: "15/12/2024".to_string(),
    };
    VehicleRecord::finalize(
        draft,
        RecordCode::parse(code).unwrap(),
        "2024-06-01T12:00:00+00:00".to_string(),
    )
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::open(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_insert_and_find_round_trip() {
    let mut store = SqliteStore::open(":memory:").unwrap();
    let record = sample_record("a1b2c3d");

    let outcome = store.insert(&record).unwrap();
    assert_eq!(outcome, InsertOutcome::Inserted);

    let found = store
        .find_by_code(&RecordCode::parse("a1b2c3d").unwrap())
        .unwrap()
        .expect("record should be found");

    assert_eq!(found, record);
}

#[test]
fn test_find_missing_code_returns_none() {
    let store = SqliteStore::open(":memory:").unwrap();
    let result = store
        .find_by_code(&RecordCode::parse("zzzzzzz").unwrap())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_exists() {
    let mut store = SqliteStore::open(":memory:").unwrap();
    let code = RecordCode::parse("a1b2c3d").unwrap();

    assert!(!store.exists(&code).unwrap());
    store.insert(&sample_record("a1b2c3d")).unwrap();
    assert!(store.exists(&code).unwrap());
}

#[test]
fn test_duplicate_code_reported_not_overwritten() {
    let mut store = SqliteStore::open(":memory:").unwrap();
    let first = sample_record("a1b2c3d");
    store.insert(&first).unwrap();

    let mut second = sample_record("a1b2c3d");
    second.plate = "XYZ-9999".to_string();

    let outcome = store.insert(&second).unwrap();
    assert_eq!(outcome, InsertOutcome::DuplicateCode);

    // Losing insert must leave the original untouched
    let found = store
        .find_by_code(&RecordCode::parse("a1b2c3d").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(found.plate, "ABC-1234");
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_empty_fields_are_persisted_as_is() {
    // The persistence layer does not re-enforce non-emptiness; a corrected
    // record may legitimately carry empty fields.
    let mut store = SqliteStore::open(":memory:").unwrap();
    let mut record = sample_record("b2c3d4e");
    record.color = String::new();
    store.insert(&record).unwrap();

    let found = store
        .find_by_code(&RecordCode::parse("b2c3d4e").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(found.color, "");
}

#[test]
fn test_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("placard.db");

    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.insert(&sample_record("c3d4e5f")).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    let found = store
        .find_by_code(&RecordCode::parse("c3d4e5f").unwrap())
        .unwrap();
    assert!(found.is_some(), "record should survive reopening the db");
}
