//! Placard Gatekeeper
//!
//! Checks extracted records for completeness before they move on to the
//! correction step.
//!
//! The Gatekeeper never rejects a record outright - an incomplete record is
//! reported field by field so the user can fill the gaps manually. This is
//! the only "failure" channel of the extraction pipeline: extraction itself
//! is total, and everything it could not recognize surfaces here as a
//! missing field.
//!
//! # Examples
//!
//! ```
//! use placard_gatekeeper::Gatekeeper;
//! use placard_domain::{PartialRecord, VehicleField};
//!
//! let mut record = PartialRecord::default();
//! record.set(VehicleField::Plate, "ABC-1234");
//!
//! let report = Gatekeeper::new().validate(&record);
//! assert!(!report.valid);
//! assert_eq!(report.missing_fields.len(), 7);
//! ```

#![warn(missing_docs)]

mod validator;

pub use validator::Gatekeeper;
