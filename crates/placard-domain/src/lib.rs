//! Placard Domain Layer
//!
//! This crate contains the core business logic and domain model for Placard.
//! It has ZERO external dependencies and defines the fundamental concepts,
//! value objects, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **VehicleField**: the eight canonical attributes of a registration card
//! - **PartialRecord**: what extraction yields - each field absent or present
//! - **ValidationReport**: which required fields are still missing
//! - **VehicleRecord**: the finalized, persisted entity keyed by a short code
//! - **RecordCode**: the shareable lookup token (storage primary key)
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod field;
pub mod record;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use code::{RecordCode, CODE_ALPHABET, CODE_LENGTH};
pub use field::VehicleField;
pub use record::{PartialRecord, RecordDraft, VehicleRecord};
pub use report::ValidationReport;
