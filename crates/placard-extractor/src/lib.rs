//! Placard Extractor
//!
//! Converts noisy OCR transcripts of vehicle registration documents into
//! structured partial records.
//!
//! # Overview
//!
//! OCR output is unreliable: line breaks land mid-field, labels arrive with
//! or without diacritics, delimiters vary, and field order is not stable.
//! The extractor therefore uses label-anchored capture: for each canonical
//! field it looks for one of several label synonyms (case-insensitive,
//! accent-tolerant) and captures the value run that follows, up to the next
//! recognized label or line end.
//!
//! # Architecture
//!
//! ```text
//! OCR transcript → FieldExtractor → PartialRecord → Gatekeeper → correction
//! ```
//!
//! Extraction is total: it never fails, whatever the input. A transcript
//! with no recognizable labels yields an empty [`PartialRecord`], which the
//! validator downstream turns into "all fields missing" - the user then
//! completes the record manually.
//!
//! # Example
//!
//! ```
//! use placard_extractor::FieldExtractor;
//! use placard_domain::VehicleField;
//!
//! let extractor = FieldExtractor::default();
//! let record = extractor.extract("PLACA: ABC-1234\nMARCA: TOYOTA\n");
//!
//! assert_eq!(record.get(VehicleField::Plate), Some("ABC-1234"));
//! assert_eq!(record.get(VehicleField::Brand), Some("TOYOTA"));
//! assert_eq!(record.get(VehicleField::Color), None);
//! ```
//!
//! [`PartialRecord`]: placard_domain::PartialRecord

#![warn(missing_docs)]

mod config;
mod dates;
mod extractor;
mod patterns;


pub use config::ExtractorConfig;
pub use dates::normalize_date;
pub use extractor::FieldExtractor;
