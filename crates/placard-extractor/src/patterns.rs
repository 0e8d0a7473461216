//! Label-anchored recognition patterns, one per canonical field
//!
//! Each pattern matches a label synonym followed by optional `:` / space
//! filler, then captures the value run in group 1. Free-text fields stop at
//! the next recognized label, a newline, or end of text; constrained fields
//! (plate, year, chassis, date) capture a fixed shape instead.

use once_cell::sync::Lazy;
use placard_domain::VehicleField;
use regex::Regex;

/// Recognition table in canonical field order.
pub(crate) static FIELD_PATTERNS: Lazy<Vec<(VehicleField, Regex)>> = Lazy::new(|| {
    [
        (
            VehicleField::Plate,
            r"(?i)(?:PLACA|PLATE|N[UÚ]MERO)[\s:]*([A-Z0-9-]{5,10})",
        ),
        (
            VehicleField::VehicleType,
            r"(?i)(?:TIPO|TYPE|CLASE|CLASS)[\s:]*([A-ZÁ-Ú\s]+?)(?:\n|MARCA|$)",
        ),
        (
            VehicleField::Brand,
            r"(?i)(?:MARCA|MAKE|BRAND)[\s:]*([A-ZÁ-Ú\s]+?)(?:\n|MODELO|$)",
        ),
        (
            VehicleField::Model,
            r"(?i)(?:MODELO|MODEL)[\s:]*([A-ZÁ-Ú0-9\s]+?)(?:\n|COLOR|AÑO|$)",
        ),
        (
            VehicleField::Color,
            r"(?i)(?:COLOR|COLOUR)[\s:]*([A-ZÁ-Ú\s]+?)(?:\n|AÑO|CHASIS|$)",
        ),
        (
            VehicleField::Year,
            r"(?i)(?:AÑO|YEAR|ANO)[\s:]*(\d{4})",
        ),
        (
            VehicleField::Chassis,
            r"(?i)(?:CHASIS|CHASSIS|VIN)[\s:]*([A-Z0-9]{10,17})",
        ),
        (
            VehicleField::ExpirationDate,
            r"(?i)(?:EXPIRA|EXPIRACI[OÓ]N|VENCE|V[AÁ]LID[OA]\s+HASTA)[\s:]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
        ),
    ]
    .into_iter()
    .map(|(field, pattern)| {
        let re = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", field, e));
        (field, re)
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert_eq!(FIELD_PATTERNS.len(), 8);
    }

    #[test]
    fn test_plate_label_synonyms() {
        let (_, re) = &FIELD_PATTERNS[0];
        for text in ["PLACA: ABC-1234", "plate ABC-1234", "NÚMERO: ABC-1234"] {
            let caps = re.captures(text).unwrap();
            assert_eq!(&caps[1], "ABC-1234", "input: {}", text);
        }
    }

    #[test]
    fn test_year_requires_four_digits() {
        let (_, re) = &FIELD_PATTERNS[5];
        assert_eq!(&re.captures("AÑO: 2021").unwrap()[1], "2021");
        assert!(re.captures("AÑO: 21").is_none());
    }

    #[test]
    fn test_date_label_accent_tolerance() {
        let (_, re) = &FIELD_PATTERNS[7];
        for text in [
            "EXPIRA: 15/12/2024",
            "expiración 15-12-24",
            "VALIDO HASTA: 1/2/2024",
            "VENCE:15/12/2024",
        ] {
            assert!(re.captures(text).is_some(), "input: {}", text);
        }
    }
}
