//! Configuration for the registry

use placard_domain::CODE_LENGTH;
use serde::{Deserialize, Serialize};

/// Configuration for the [`Registry`](crate::Registry) and its code generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Generated code length (characters)
    pub code_length: usize,

    /// Upper bound on code candidates sampled per registration. With the
    /// 36-character alphabet and 7-character codes the first candidate is
    /// free in the overwhelming majority of cases; exhausting this bound
    /// means the store is pathological and we fail loudly.
    pub max_code_attempts: u32,

    /// Upper bound on insert attempts when the check-then-insert race is
    /// lost and the code must be resampled.
    pub max_insert_attempts: u32,
}

impl RegistryConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.code_length == 0 {
            return Err("code_length must be greater than 0".to_string());
        }
        if self.code_length > 32 {
            return Err("code_length must not exceed 32".to_string());
        }
        if self.max_code_attempts == 0 {
            return Err("max_code_attempts must be greater than 0".to_string());
        }
        if self.max_insert_attempts == 0 {
            return Err("max_insert_attempts must be greater than 0".to_string());
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

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            max_code_attempts: 1000,
            max_insert_attempts: 3,
        }
    }
}
