//! Placard CLI - scan vehicle registration documents, register them, and
//! look them back up by code.

use clap::Parser;
use placard_cli::commands;
use placard_cli::{Cli, Command, Config, Formatter};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> placard_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // CLI overrides
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(base) = cli.share_base_url {
        config.share_base_url = base;
    }

    let formatter = Formatter::new(cli.format.unwrap_or_default());

    match cli.command {
        Command::Scan(args) => commands::execute_scan(args, &formatter),
        Command::Register(args) => commands::execute_register(args, &config, &formatter),
        Command::Show(args) => commands::execute_show(args, &config, &formatter),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
