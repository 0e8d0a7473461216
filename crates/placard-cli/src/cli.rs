//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Placard - vehicle registration document scanner and registry.
#[derive(Debug, Parser)]
#[command(name = "placard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Database file path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Base URL for share links (overrides config)
    #[arg(long, global = true)]
    pub share_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract fields from an OCR transcript and report what is missing
    Scan(ScanArgs),

    /// Register a corrected record and print its lookup code
    Register(RegisterArgs),

    /// Look up a registered record by code
    Show(ShowArgs),
}

/// Arguments for `scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Transcript file; reads stdin when omitted
    pub file: Option<PathBuf>,
}

/// Arguments for `register`.
///
/// Every canonical field has a flag. Omitted fields are stored empty; the
/// correction step has already had its say by the time this runs.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// License plate
    #[arg(long, default_value = "")]
    pub plate: String,

    /// Vehicle class
    #[arg(long, default_value = "")]
    pub vehicle_type: String,

    /// Manufacturer
    #[arg(long, default_value = "")]
    pub brand: String,

    /// Model
    #[arg(long, default_value = "")]
    pub model: String,

    /// Color
    #[arg(long, default_value = "")]
    pub color: String,

    /// Model year
    #[arg(long, default_value = "")]
    pub year: String,

    /// Chassis / VIN
    #[arg(long, default_value = "")]
    pub chassis: String,

    /// Expiration date (DD/MM/YYYY)
    #[arg(long, default_value = "")]
    pub expiration_date: String,
}

/// Arguments for `show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// The record's lookup code
    pub code: String,
}
