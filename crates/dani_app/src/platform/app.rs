use std::path::{Path, PathBuf};

use anyhow::Context;
use dani_core::dan_ranks;
use dani_engine::{reset_output_dir, HarvestEngine, RunMode};
use dani_logging::{dani_debug, dani_info};

use super::cli::Args;

pub fn run(args: &Args) -> anyhow::Result<()> {
    dani_info!("starting up");
    let mode = prepare(args.skip_scrape, &args.data_dir)?;
    let engine = HarvestEngine::new(args.fetch_settings(), args.harvest_settings())
        .context("failed to set up the harvest engine")?;

    let files = engine
        .run(mode, &args.data_dir)
        .with_context(|| format!("harvest into {} failed", args.data_dir.display()))?;
    report(&files);
    Ok(())
}

/// Readies the data directory and picks the run mode.
///
/// A live harvest always starts from an empty directory so artifact names
/// never collide with a previous run.
fn prepare(skip_scrape: bool, data_dir: &Path) -> anyhow::Result<RunMode> {
    if skip_scrape {
        return Ok(RunMode::Replay);
    }
    reset_output_dir(data_dir)
        .with_context(|| format!("could not prepare {}", data_dir.display()))?;
    let ranks = dan_ranks();
    dani_debug!("{:?}", ranks);
    Ok(RunMode::Scrape { ranks })
}

fn report(files: &[PathBuf]) {
    dani_info!("{} data file(s)", files.len());
    for file in files {
        dani_info!("  {}", file.display());
    }
}
