//! Completeness validation logic

use placard_domain::{PartialRecord, ValidationReport, VehicleField};

/// The Gatekeeper reports which required fields a partial record is missing.
///
/// Validation is a pure function: no store access, no side effects, and the
/// `missing_fields` order is always the canonical field order regardless of
/// how the record was populated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gatekeeper;

impl Gatekeeper {
    /// Create a new Gatekeeper.
    pub fn new() -> Self {
        Self
    }

    /// Check a partial record against the eight required fields.
    ///
    /// A field is missing when it is absent from the record. Present values
    /// are guaranteed non-empty by [`PartialRecord`]'s setter, so absence is
    /// the single missing condition here.
    pub fn validate(&self, record: &PartialRecord) -> ValidationReport {
        let missing: Vec<VehicleField> = VehicleField::ALL
            .iter()
            .copied()
            .filter(|field| record.get(*field).is_none_or(str::is_empty))
            .collect();

        ValidationReport::from_missing(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> PartialRecord {
        let mut record = PartialRecord::default();
        record.set(VehicleField::Plate, "ABC-1234");
        record.set(VehicleField::VehicleType, "AUTOMOVIL");
        record.set(VehicleField::Brand, "TOYOTA");
        record.set(VehicleField::Model, "COROLLA");
        record.set(VehicleField::Color, "ROJO");
        record.set(VehicleField::Year, "2020");
        record.set(VehicleField::Chassis, "1HGBH41JXMN109186");
        record.set(VehicleField::ExpirationDate, "15/12/2024");
        record
    }

    #[test]
    fn test_complete_record_is_valid() {
        let report = Gatekeeper::new().validate(&complete_record());
        assert!(report.valid);
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_empty_record_misses_everything() {
        let report = Gatekeeper::new().validate(&PartialRecord::default());
        assert!(!report.valid);
        assert_eq!(report.missing_fields, VehicleField::ALL.to_vec());
    }

    #[test]
    fn test_missing_fields_in_canonical_order() {
        // Populate out of canonical order; the report must not care.
        let mut record = PartialRecord::default();
        record.set(VehicleField::ExpirationDate, "15/12/2024");
        record.set(VehicleField::Plate, "ABC-1234");
        record.set(VehicleField::Color, "GRIS");

        let report = Gatekeeper::new().validate(&record);
        assert_eq!(
            report.missing_fields,
            vec![
                VehicleField::VehicleType,
                VehicleField::Brand,
                VehicleField::Model,
                VehicleField::Year,
                VehicleField::Chassis,
            ]
        );
    }

    #[test]
    fn test_cleared_field_counts_as_missing() {
        let mut record = complete_record();
        record.set(VehicleField::Year, "  ");

        let report = Gatekeeper::new().validate(&record);
        assert_eq!(report.missing_fields, vec![VehicleField::Year]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let record = complete_record();
        let gatekeeper = Gatekeeper::new();
        assert_eq!(gatekeeper.validate(&record), gatekeeper.validate(&record));
    }
}
