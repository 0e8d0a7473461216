//! Core field extraction over OCR transcripts

use crate::config::ExtractorConfig;
use crate::dates::normalize_date;
use crate::patterns::FIELD_PATTERNS;
use placard_domain::{PartialRecord, VehicleField};
use tracing::{debug, warn};

/// Extracts canonical fields from a raw OCR transcript.
///
/// For each field the first label match in the transcript wins; repeated
/// labels are ignored. Captured values are trimmed, and expiration dates
/// are passed through [`normalize_date`]. Extraction never fails: malformed
/// or empty input yields an empty [`PartialRecord`].
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    config: ExtractorConfig,
}

impl FieldExtractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract a partial record from an OCR transcript.
    pub fn extract(&self, text: &str) -> PartialRecord {
        let text = self.clamp(text);
        let mut record = PartialRecord::default();

        for (field, pattern) in FIELD_PATTERNS.iter() {
            let Some(captured) = pattern.captures(text).and_then(|c| c.get(1)) else {
                continue;
            };

            let mut value = captured.as_str().trim().to_string();
            if value.is_empty() {
                // Label found but the value run was all filler; counts as
                // missing, same as no label at all.
                continue;
            }
            if *field == VehicleField::ExpirationDate {
                value = normalize_date(&value);
            }

            debug!(field = %field, value = %value, "field recognized");
            record.set(*field, value);
        }

        if record.is_empty() {
            debug!("no recognizable labels in transcript");
        }
        record
    }

    /// Truncate oversized transcripts at a char boundary.
    fn clamp<'a>(&self, text: &'a str) -> &'a str {
        let max = self.config.max_transcript_len;
        if text.len() <= max {
            return text;
        }
        warn!(
            len = text.len(),
            max, "transcript exceeds maximum length, truncating"
        );
        let cut = (0..=max).rev().find(|i| text.is_char_boundary(*i)).unwrap_or(0);
        &text[..cut]
    }
}
