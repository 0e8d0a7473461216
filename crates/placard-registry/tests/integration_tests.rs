//! Integration tests for placard-registry
//!
//! Exercises the registration flow end to end against the SQLite store.

use placard_domain::{RecordCode, RecordDraft, VehicleField};
use placard_registry::{Registry, RegistryConfig};
use placard_store::SqliteStore;
use std::collections::HashSet;

fn sample_draft() -> RecordDraft {
    RecordDraft {
        plate: "ABC-1234".to_string(),
        vehicle_type: "AUTOMOVIL".to_string(),
        brand: "TOYOTA".to_string(),
        model: "COROLLA".to_string(),
        color: "ROJO".to_string(),
        year: "2020".to_string(),
        chassis: "1HGBH41JXMN109186".to_string(),
        expiration_date: "15/12/2024".to_string(),
    }
}

fn registry() -> Registry<SqliteStore> {
    let store = SqliteStore::open(":memory:").unwrap();
    Registry::new(store, RegistryConfig::default())
}

#[test]
fn test_register_and_lookup_round_trip() {
    let mut registry = registry();
    let draft = sample_draft();

    let code = registry.register(draft.clone()).unwrap();
    let record = registry
        .lookup(&code)
        .unwrap()
        .expect("registered record should be retrievable");

    for field in VehicleField::ALL {
        assert_eq!(record.field(field), draft.get(field), "field: {}", field);
    }
    assert_eq!(record.code, code);
    assert!(!record.registered_at.is_empty());
}

#[test]
fn test_registered_codes_are_distinct() {
    let mut registry = registry();

    let codes: HashSet<String> = (0..50)
        .map(|_| {
            registry
                .register(sample_draft())
                .unwrap()
                .as_str()
                .to_string()
        })
        .collect();
    assert_eq!(codes.len(), 50);
}

#[test]
fn test_lookup_unknown_code() {
    let registry = registry();
    let result = registry
        .lookup(&RecordCode::parse("zzzzzzz").unwrap())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_register_accepts_incomplete_draft() {
    // The correction step may submit empty fields; persistence does not
    // re-validate completeness.
    let mut registry = registry();
    let draft = RecordDraft {
        plate: "ABC-1234".to_string(),
        ..Default::default()
    };

    let code = registry.register(draft).unwrap();
    let record = registry.lookup(&code).unwrap().unwrap();
    assert_eq!(record.plate, "ABC-1234");
    assert_eq!(record.brand, "");
}

#[test]
fn test_registered_at_is_rfc3339() {
    let mut registry = registry();
    let code = registry.register(sample_draft()).unwrap();
    let record = registry.lookup(&code).unwrap().unwrap();

    assert!(
        chrono::DateTime::parse_from_rfc3339(&record.registered_at).is_ok(),
        "registered_at should be RFC 3339, got {:?}",
        record.registered_at
    );
}
