//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates
//! (placard-store provides the SQLite-backed [`RecordStore`]).

use crate::code::RecordCode;
use crate::record::VehicleRecord;

/// Outcome of an insert attempt.
///
/// The check-then-insert pattern used for code assignment is not atomic:
/// two concurrent callers can observe the same candidate code as free.
/// A conforming store backs the code with a uniqueness constraint and
/// reports the losing insert as [`InsertOutcome::DuplicateCode`] rather
/// than an error, so the caller can resample and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was persisted under its code.
    Inserted,
    /// The code was already taken; the record was NOT persisted.
    DuplicateCode,
}

/// Trait for durable keyed storage of vehicle records.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Check whether a code is already assigned.
    fn exists(&self, code: &RecordCode) -> Result<bool, Self::Error>;

    /// Insert a finalized record under its code.
    ///
    /// Must be backed by a uniqueness guarantee on the code; a duplicate
    /// is reported via [`InsertOutcome::DuplicateCode`], not by silently
    /// overwriting.
    fn insert(&mut self, record: &VehicleRecord) -> Result<InsertOutcome, Self::Error>;

    /// Look up a record by code. `Ok(None)` means not found.
    fn find_by_code(&self, code: &RecordCode) -> Result<Option<VehicleRecord>, Self::Error>;
}
