//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Configuration for the [`FieldExtractor`](crate::FieldExtractor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum transcript length scanned (bytes). Longer input is truncated
    /// at a character boundary before matching; registration cards are short
    /// and a runaway transcript is OCR garbage, not data.
    pub max_transcript_len: usize,
}

impl ExtractorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_transcript_len == 0 {
            return Err("max_transcript_len must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_transcript_len: 20_000,
        }
    }
}
