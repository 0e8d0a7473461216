//! The canonical field set for vehicle registration documents

use std::fmt;

/// One of the eight canonical attributes extracted from a registration card.
///
/// The variant order below is the canonical field order. Everything that
/// enumerates fields - validation reports, storage columns, CLI output -
/// follows this order, never discovery order.
///
/// Historical variants of this system disagreed on field naming (`ano` vs
/// `año`, `code` vs `codigo`). The canonical wire/storage name for each
/// variant is the snake_case string returned by [`VehicleField::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleField {
    /// License plate number
    Plate,
    /// Vehicle class (car, motorcycle, truck, ...)
    VehicleType,
    /// Manufacturer
    Brand,
    /// Model name
    Model,
    /// Body color
    Color,
    /// Four-digit model year
    Year,
    /// Chassis / VIN number
    Chassis,
    /// Registration expiration date
    ExpirationDate,
}

impl VehicleField {
    /// All eight canonical fields, in canonical order.
    pub const ALL: [VehicleField; 8] = [
        VehicleField::Plate,
        VehicleField::VehicleType,
        VehicleField::Brand,
        VehicleField::Model,
        VehicleField::Color,
        VehicleField::Year,
        VehicleField::Chassis,
        VehicleField::ExpirationDate,
    ];

    /// The canonical snake_case name, used for storage columns and JSON keys.
    pub fn name(&self) -> &'static str {
        match self {
            VehicleField::Plate => "plate",
            VehicleField::VehicleType => "vehicle_type",
            VehicleField::Brand => "brand",
            VehicleField::Model => "model",
            VehicleField::Color => "color",
            VehicleField::Year => "year",
            VehicleField::Chassis => "chassis",
            VehicleField::ExpirationDate => "expiration_date",
        }
    }

    /// Parse a canonical field name back into a field.
    pub fn from_name(name: &str) -> Option<VehicleField> {
        VehicleField::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for VehicleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(VehicleField::ALL[0], VehicleField::Plate);
        assert_eq!(VehicleField::ALL[7], VehicleField::ExpirationDate);
        assert_eq!(VehicleField::ALL.len(), 8);
    }

    #[test]
    fn test_name_round_trip() {
        for field in VehicleField::ALL {
            assert_eq!(VehicleField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(VehicleField::from_name("codigo"), None);
        assert_eq!(VehicleField::from_name("ano"), None);
    }
}
