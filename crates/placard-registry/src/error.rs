//! Error types for the registry

use thiserror::Error;

/// Errors that can occur during registration and lookup
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Record store error
    #[error("Store error: {0}")]
    Store(String),

    /// Every sampled code candidate collided with an existing record
    #[error("Code generation exhausted after {attempts} attempts")]
    CodeRetriesExhausted {
        /// How many candidates were tried
        attempts: u32,
    },

    /// Every insert attempt lost the code race
    #[error("Insert retries exhausted after {attempts} attempts")]
    InsertRetriesExhausted {
        /// How many inserts were attempted
        attempts: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
