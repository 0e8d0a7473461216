//! `register` - persist a corrected record and print its code.

use crate::cli::RegisterArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use placard_domain::RecordDraft;
use placard_registry::{share_url, Registry, RegistryConfig};
use placard_store::SqliteStore;

/// Register a record and print the assigned code plus its share link.
pub fn execute_register(args: RegisterArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let draft = RecordDraft {
        plate: args.plate,
        vehicle_type: args.vehicle_type,
        brand: args.brand,
        model: args.model,
        color: args.color,
        year: args.year,
        chassis: args.chassis,
        expiration_date: args.expiration_date,
    };

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let store = SqliteStore::open(&config.db_path)?;
    let mut registry = Registry::new(store, RegistryConfig::default());

    let code = registry.register(draft)?;
    let url = share_url(&config.share_base_url, &code);
    formatter.registered(&code, &url)
}
