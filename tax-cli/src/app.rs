//! The two ways of running the estimator: one interactive taxpayer, or a
//! batch of profiles loaded from CSV. Both call the engine once per
//! profile and print a summary to `output`.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tax_core::TaxEngine;
use tracing::{debug, info};

use crate::csv_loader::{self, LoadedProfile};
use crate::prompt::Prompter;
use crate::summary::render_summary;

/// Name used in the summary header for CSV rows without one.
const UNNAMED: &str = "taxpayer";

/// Prompts for one profile and prints its summary.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &TaxEngine,
    input: R,
    mut output: W,
) -> Result<()> {
    let (name, profile) = Prompter::new(input, &mut output, engine.config())
        .collect_profile()
        .context("failed to collect taxpayer details")?;

    let result = engine.calculate(&profile)?;
    write!(output, "{}", render_summary(&name, &profile, &result))?;
    output.flush()?;
    Ok(())
}

/// Prints a summary for every profile, in order.
///
/// Stops at the first profile the engine rejects.
pub fn run_batch<W: Write>(
    engine: &TaxEngine,
    profiles: &[LoadedProfile],
    mut output: W,
) -> Result<()> {
    for (idx, loaded) in profiles.iter().enumerate() {
        let row = idx + 1;
        let name = loaded.name.as_deref().unwrap_or(UNNAMED);
        debug!(row, name, "calculating profile");

        let result = engine
            .calculate(&loaded.profile)
            .with_context(|| format!("row {row} ({name}) could not be calculated"))?;
        write!(output, "{}", render_summary(name, &loaded.profile, &result))?;
    }
    output.flush()?;
    Ok(())
}

/// Loads profiles from `path` and runs them as a batch.
pub fn run_file<W: Write>(
    engine: &TaxEngine,
    path: &Path,
    output: W,
) -> Result<()> {
    let profiles = csv_loader::load_from_file(path, engine.config())
        .with_context(|| format!("failed to load profiles from '{}'", path.display()))?;
    info!(count = profiles.len(), path = %path.display(), "loaded profiles");
    run_batch(engine, &profiles, output)
}
