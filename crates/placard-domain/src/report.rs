//! Validation report - which required fields are still missing

use crate::field::VehicleField;

/// Result of checking a partial record against the required field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True iff no required field is missing
    pub valid: bool,
    /// The missing fields, in canonical field order
    pub missing_fields: Vec<VehicleField>,
}

impl ValidationReport {
    /// Build a report from the missing-field list. Callers must supply the
    /// list in canonical order; `valid` is derived.
    pub fn from_missing(missing_fields: Vec<VehicleField>) -> Self {
        Self {
            valid: missing_fields.is_empty(),
            missing_fields,
        }
    }
}
