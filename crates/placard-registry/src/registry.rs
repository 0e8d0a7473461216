//! Registration and lookup over a record store

use crate::codegen::CodeGenerator;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use placard_domain::traits::{InsertOutcome, RecordStore};
use placard_domain::{RecordCode, RecordDraft, VehicleRecord};
use tracing::{info, warn};

/// Owns the store and drives the register/lookup flow.
pub struct Registry<S: RecordStore> {
    store: S,
    codegen: CodeGenerator,
    config: RegistryConfig,
}

impl<S> Registry<S>
where
    S: RecordStore,
    S::Error: std::fmt::Display,
{
    /// Create a registry over a store.
    pub fn new(store: S, config: RegistryConfig) -> Self {
        Self {
            codegen: CodeGenerator::new(&config),
            store,
            config,
        }
    }

    /// Persist a finalized draft under a freshly minted code.
    ///
    /// Mints a candidate code, stamps `registered_at`, and inserts. If the
    /// insert loses the check-then-insert race (another caller took the
    /// code between our existence check and write), a new code is sampled
    /// and the insert retried, up to `max_insert_attempts`.
    pub fn register(&mut self, draft: RecordDraft) -> Result<RecordCode, RegistryError> {
        for attempt in 1..=self.config.max_insert_attempts {
            let code = self.codegen.generate(&self.store)?;
            let record = VehicleRecord::finalize(
                draft.clone(),
                code.clone(),
                chrono::Utc::now().to_rfc3339(),
            );

            let outcome = self
                .store
                .insert(&record)
                .map_err(|e| RegistryError::Store(e.to_string()))?;

            match outcome {
                InsertOutcome::Inserted => {
                    info!(code = %code, plate = %record.plate, "vehicle registered");
                    return Ok(code);
                }
                InsertOutcome::DuplicateCode => {
                    warn!(code = %code, attempt, "lost code race, resampling");
                }
            }
        }

        Err(RegistryError::InsertRetriesExhausted {
            attempts: self.config.max_insert_attempts,
        })
    }

    /// Look up a record by its code. `Ok(None)` means no such record.
    pub fn lookup(&self, code: &RecordCode) -> Result<Option<VehicleRecord>, RegistryError> {
        self.store
            .find_by_code(code)
            .map_err(|e| RegistryError::Store(e.to_string()))
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
