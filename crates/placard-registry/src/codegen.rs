//! Unique code generation

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use placard_domain::traits::RecordStore;
use placard_domain::{RecordCode, CODE_ALPHABET};
use rand::Rng;
use tracing::warn;

/// Samples short random codes and checks them against the store until a
/// free one is found.
///
/// The generator only queries; it never reserves. The caller must insert
/// the record promptly after assignment and be prepared for a lost
/// check-then-insert race (see [`Registry`](crate::Registry)).
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
    max_attempts: u32,
}

impl CodeGenerator {
    /// Create a generator from registry configuration.
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            length: config.code_length,
            max_attempts: config.max_code_attempts,
        }
    }

    /// Generate a code that does not exist in the store at check time.
    ///
    /// Fails with [`RegistryError::CodeRetriesExhausted`] once the attempt
    /// bound is hit - a store where 1000 random candidates in a 36^7 key
    /// space all collide is broken, and looping forever would hide that.
    pub fn generate<S>(&self, store: &S) -> Result<RecordCode, RegistryError>
    where
        S: RecordStore,
        S::Error: std::fmt::Display,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = self.sample();
            let code =
                RecordCode::parse(&candidate).map_err(RegistryError::Config)?;

            let taken = store
                .exists(&code)
                .map_err(|e| RegistryError::Store(e.to_string()))?;
            if !taken {
                return Ok(code);
            }
            warn!(code = %code, attempt, "code collision, resampling");
        }

        Err(RegistryError::CodeRetriesExhausted {
            attempts: self.max_attempts,
        })
    }

    fn sample(&self) -> String {
        let alphabet: Vec<char> = CODE_ALPHABET.chars().collect();
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }
}
