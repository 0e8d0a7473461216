//! Placard Storage Layer
//!
//! Implements the [`RecordStore`] trait using SQLite.
//!
//! # Architecture
//!
//! - One `vehicles` table, one row per registered vehicle
//! - The lookup code is the PRIMARY KEY; a duplicate insert is reported as
//!   [`InsertOutcome::DuplicateCode`] so the registry can resample
//! - A `snapshot_json` column keeps the record as submitted, verbatim
//!
//! # Examples
//!
//! ```no_run
//! use placard_store::SqliteStore;
//!
//! let store = SqliteStore::open("placard.db").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use placard_domain::traits::{InsertOutcome, RecordStore};
use placard_domain::{RecordCode, VehicleField, VehicleRecord};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row failed to map back into a domain record
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of [`RecordStore`]
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance; the code PRIMARY KEY keeps concurrent writers
/// from clobbering each other across connections.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// How many records the store holds.
    pub fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// JSON snapshot of a record, written verbatim to `snapshot_json`.
    fn snapshot(record: &VehicleRecord) -> String {
        let mut map = serde_json::Map::new();
        map.insert("code".to_string(), record.code.as_str().into());
        for field in VehicleField::ALL {
            map.insert(field.name().to_string(), record.field(field).into());
        }
        map.insert("registered_at".to_string(), record.registered_at.as_str().into());
        serde_json::Value::Object(map).to_string()
    }

    fn row_to_parts(row: &rusqlite::Row<'_>) -> rusqlite::Result<VehicleRow> {
        Ok(VehicleRow {
            code: row.get(0)?,
            plate: row.get(1)?,
            vehicle_type: row.get(2)?,
            brand: row.get(3)?,
            model: row.get(4)?,
            color: row.get(5)?,
            year: row.get(6)?,
            chassis: row.get(7)?,
            expiration_date: row.get(8)?,
            registered_at: row.get(9)?,
        })
    }
}

/// Raw column values; the code is validated separately because parsing it
/// can fail outside rusqlite's error type.
struct VehicleRow {
    code: String,
    plate: String,
    vehicle_type: String,
    brand: String,
    model: String,
    color: String,
    year: String,
    chassis: String,
    expiration_date: String,
    registered_at: String,
}

impl VehicleRow {
    fn into_record(self) -> Result<VehicleRecord, StoreError> {
        let code = RecordCode::parse(&self.code).map_err(StoreError::InvalidData)?;
        Ok(VehicleRecord {
            code,
            plate: self.plate,
            vehicle_type: self.vehicle_type,
            brand: self.brand,
            model: self.model,
            color: self.color,
            year: self.year,
            chassis: self.chassis,
            expiration_date: self.expiration_date,
            registered_at: self.registered_at,
        })
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn exists(&self, code: &RecordCode) -> Result<bool, Self::Error> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM vehicles WHERE code = ?1 LIMIT 1",
                params![code.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn insert(&mut self, record: &VehicleRecord) -> Result<InsertOutcome, Self::Error> {
        let snapshot = Self::snapshot(record);
        let result = self.conn.execute(
            "INSERT INTO vehicles
             (code, plate, vehicle_type, brand, model, color, year, chassis, expiration_date, registered_at, snapshot_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                record.code.as_str(),
                record.plate,
                record.vehicle_type,
                record.brand,
                record.model,
                record.color,
                record.year,
                record.chassis,
                record.expiration_date,
                record.registered_at,
                snapshot,
            ],
        );

        match result {
            Ok(_) => {
                debug!(code = %record.code, "record inserted");
                Ok(InsertOutcome::Inserted)
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                debug!(code = %record.code, "insert lost the code race");
                Ok(InsertOutcome::DuplicateCode)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn find_by_code(&self, code: &RecordCode) -> Result<Option<VehicleRecord>, Self::Error> {
        let row = self
            .conn
            .query_row(
                "SELECT code, plate, vehicle_type, brand, model, color, year, chassis, expiration_date, registered_at
                 FROM vehicles WHERE code = ?1",
                params![code.as_str()],
                Self::row_to_parts,
            )
            .optional()?;

        row.map(VehicleRow::into_record).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_domain::RecordDraft;

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
    fn test_snapshot_contains_all_fields() {
        let record = sample_record("a1b2c3d");
        let snapshot = SqliteStore::snapshot(&record);
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();

        assert_eq!(value["code"], "a1b2c3d");
        assert_eq!(value["plate"], "ABC-1234");
        assert_eq!(value["expiration_date"], "15/12/2024");
        assert_eq!(value["registered_at"], "2024-06-01T12:00:00+00:00");
    }
}
