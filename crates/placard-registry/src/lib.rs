//! Placard Registry
//!
//! The registration flow: mint a unique lookup code, persist the finalized
//! record under it, and serve records back by code.
//!
//! # Architecture
//!
//! ```text
//! RecordDraft → CodeGenerator (samples against store) → VehicleRecord
//!            → RecordStore::insert → RecordCode → share URL / QR payload
//! ```
//!
//! The generator's check-then-insert is not atomic, so the registry leans on
//! the store's code-uniqueness guarantee: an insert that loses the race comes
//! back as `DuplicateCode` and the registry resamples. Both loops are bounded
//! so termination is provable rather than probabilistic folklore.
//!
//! # Example
//!
//! ```no_run
//! use placard_registry::{Registry, RegistryConfig};
//! use placard_store::SqliteStore;
//! use placard_domain::RecordDraft;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::open("placard.db")?;
//! let mut registry = Registry::new(store, RegistryConfig::default());
//!
//! let draft = RecordDraft {
//!     plate: "ABC-1234".to_string(),
//!     ..Default::default()
//! };
//! let code = registry.register(draft)?;
//! println!("registered as {}", code);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod codegen;
mod config;
mod error;
mod registry;
mod share;

pub use codegen::CodeGenerator;
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::Registry;
pub use share::share_url;
