use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_cli::{app, logging};
use tax_core::TaxEngine;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// 2025 US federal income tax estimator.
///
/// Without `--input`, asks for one taxpayer's details interactively. With
/// `--input`, estimates every profile in the CSV file.
#[derive(Debug, Parser)]
#[command(name = "tax-estimator", version)]
struct Cli {
    /// CSV file of taxpayer profiles to estimate in one batch.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Log filter: a level ("warn", "debug", ...) or an EnvFilter directive.
    /// Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())
        .context("failed to initialize logging")?;
    debug!(?cli, "starting");

    let engine = TaxEngine::new();
    let stdout = io::stdout().lock();

    match &cli.input {
        Some(path) => app::run_file(&engine, path, stdout),
        None => app::run_interactive(&engine, io::stdin().lock(), stdout),
    }
}
