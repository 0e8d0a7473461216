//! `show` - look up a stored record by its code.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use placard_domain::RecordCode;
use placard_registry::{Registry, RegistryConfig};
use placard_store::SqliteStore;

/// Retrieve and print the record stored under a code.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let code = RecordCode::parse(&args.code).map_err(CliError::InvalidInput)?;

    let store = SqliteStore::open(&config.db_path)?;
    let registry = Registry::new(store, RegistryConfig::default());

    match registry.lookup(&code)? {
        Some(record) => formatter.record(&record),
        None => Err(CliError::NotFound(code.as_str().to_string())),
    }
}
