//! Record types - from raw extraction output to the persisted entity

use crate::code::RecordCode;
use crate::field::VehicleField;

/// What field extraction yields: each canonical field either absent or
/// holding a trimmed, non-empty value.
///
/// The absent/empty distinction matters downstream - the validator treats
/// absence as "missing", and [`PartialRecord::set`] maintains the invariant
/// that present values are never empty or padded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRecord {
    /// License plate, if recognized
    pub plate: Option<String>,
    /// Vehicle class, if recognized
    pub vehicle_type: Option<String>,
    /// Manufacturer, if recognized
    pub brand: Option<String>,
    /// Model, if recognized
    pub model: Option<String>,
    /// Color, if recognized
    pub color: Option<String>,
    /// Model year, if recognized
    pub year: Option<String>,
    /// Chassis / VIN, if recognized
    pub chassis: Option<String>,
    /// Expiration date (canonical DD/MM/YYYY where normalizable)
    pub expiration_date: Option<String>,
}

impl PartialRecord {
    /// Get a field's value, if present.
    pub fn get(&self, field: VehicleField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field's value. The value is trimmed; a value that trims to
    /// empty clears the field instead (preserving the absent/empty
    /// distinction).
    pub fn set(&mut self, field: VehicleField, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        *self.slot_mut(field) = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// True if no field was recognized at all.
    pub fn is_empty(&self) -> bool {
        VehicleField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Convert into a draft for persistence, with absent fields becoming
    /// empty strings. Used after the user has had the chance to correct
    /// the record - the persistence layer does not re-enforce non-emptiness.
    pub fn into_draft(self) -> RecordDraft {
        RecordDraft {
            plate: self.plate.unwrap_or_default(),
            vehicle_type: self.vehicle_type.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            chassis: self.chassis.unwrap_or_default(),
            expiration_date: self.expiration_date.unwrap_or_default(),
        }
    }

    fn slot(&self, field: VehicleField) -> &Option<String> {
        match field {
            VehicleField::Plate => &self.plate,
            VehicleField::VehicleType => &self.vehicle_type,
            VehicleField::Brand => &self.brand,
            VehicleField::Model => &self.model,
            VehicleField::Color => &self.color,
            VehicleField::Year => &self.year,
            VehicleField::Chassis => &self.chassis,
            VehicleField::ExpirationDate => &self.expiration_date,
        }
    }

    fn slot_mut(&mut self, field: VehicleField) -> &mut Option<String> {
        match field {
            VehicleField::Plate => &mut self.plate,
            VehicleField::VehicleType => &mut self.vehicle_type,
            VehicleField::Brand => &mut self.brand,
            VehicleField::Model => &mut self.model,
            VehicleField::Color => &mut self.color,
            VehicleField::Year => &mut self.year,
            VehicleField::Chassis => &mut self.chassis,
            VehicleField::ExpirationDate => &mut self.expiration_date,
        }
    }
}

/// A user-corrected record ready for persistence. Fields are plain strings
/// and may be empty - completeness is the validator's concern, enforced
/// before this point by the correction flow, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    /// License plate
    pub plate: String,
    /// Vehicle class
    pub vehicle_type: String,
    /// Manufacturer
    pub brand: String,
    /// Model
    pub model: String,
    /// Color
    pub color: String,
    /// Model year
    pub year: String,
    /// Chassis / VIN
    pub chassis: String,
    /// Expiration date
    pub expiration_date: String,
}

impl RecordDraft {
    /// Get a field's value.
    pub fn get(&self, field: VehicleField) -> &str {
        match field {
            VehicleField::Plate => &self.plate,
            VehicleField::VehicleType => &self.vehicle_type,
            VehicleField::Brand => &self.brand,
            VehicleField::Model => &self.model,
            VehicleField::Color => &self.color,
            VehicleField::Year => &self.year,
            VehicleField::Chassis => &self.chassis,
            VehicleField::ExpirationDate => &self.expiration_date,
        }
    }
}

/// The finalized, persisted entity.
///
/// Created only at the moment of successful persistence. `code` and
/// `registered_at` are set once and never mutated; records are never
/// updated in place by this core.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    /// Unique lookup code (storage primary key)
    pub code: RecordCode,
    /// License plate
    pub plate: String,
    /// Vehicle class
    pub vehicle_type: String,
    /// Manufacturer
    pub brand: String,
    /// Model
    pub model: String,
    /// Color
    pub color: String,
    /// Model year
    pub year: String,
    /// Chassis / VIN
    pub chassis: String,
    /// Expiration date
    pub expiration_date: String,
    /// Creation timestamp, RFC 3339
    pub registered_at: String,
}

impl VehicleRecord {
    /// Build the persisted entity from a draft plus the assigned code and
    /// registration timestamp.
    pub fn finalize(draft: RecordDraft, code: RecordCode, registered_at: String) -> Self {
        Self {
            code,
            plate: draft.plate,
            vehicle_type: draft.vehicle_type,
            brand: draft.brand,
            model: draft.model,
            color: draft.color,
            year: draft.year,
            chassis: draft.chassis,
            expiration_date: draft.expiration_date,
            registered_at,
        }
    }

    /// Get a canonical field's value.
    pub fn field(&self, field: VehicleField) -> &str {
        match field {
            VehicleField::Plate => &self.plate,
            VehicleField::VehicleType => &self.vehicle_type,
            VehicleField::Brand => &self.brand,
            VehicleField::Model => &self.model,
            VehicleField::Color => &self.color,
            VehicleField::Year => &self.year,
            VehicleField::Chassis => &self.chassis,
            VehicleField::ExpirationDate => &self.expiration_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_trims_value() {
        let mut record = PartialRecord::default();
        record.set(VehicleField::Brand, "  TOYOTA  ");
        assert_eq!(record.get(VehicleField::Brand), Some("TOYOTA"));
    }

    #[test]
    fn test_set_empty_clears_field() {
        let mut record = PartialRecord::default();
        record.set(VehicleField::Color, "ROJO");
        record.set(VehicleField::Color, "   ");
        assert_eq!(record.get(VehicleField::Color), None);
    }

    #[test]
    fn test_is_empty() {
        let mut record = PartialRecord::default();
        assert!(record.is_empty());
        record.set(VehicleField::Plate, "ABC-1234");
        assert!(!record.is_empty());
    }

    #[test]
    fn test_into_draft_fills_absent_with_empty() {
        let mut record = PartialRecord::default();
        record.set(VehicleField::Plate, "ABC-1234");
        let draft = record.into_draft();
        assert_eq!(draft.plate, "ABC-1234");
        assert_eq!(draft.color, "");
    }

    #[test]
    fn test_finalize_carries_all_fields() {
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
        let code = RecordCode::parse("a1b2c3d").unwrap();
        let record = VehicleRecord::finalize(draft, code.clone(), "2024-01-01T00:00:00Z".to_string());
        assert_eq!(record.code, code);
        assert_eq!(record.field(VehicleField::Chassis), "1HGBH41JXMN109186");
        assert_eq!(record.registered_at, "2024-01-01T00:00:00Z");
    }
}
