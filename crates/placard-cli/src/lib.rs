//! Placard CLI library
//!
//! The `placard` binary wires the extraction pipeline and the registry into
//! three commands:
//!
//! - `scan` - run field extraction + validation over an OCR transcript
//! - `register` - persist a corrected record and print its code + share URL
//! - `show` - look a record back up by code

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
