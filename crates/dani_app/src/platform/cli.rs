use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use dani_core::{DEFAULT_BASE_URL, DEFAULT_GAME_VERSION};
use dani_engine::{FetchSettings, HarvestSettings};

/// Gets player dan ranking data for IIDX.
#[derive(Debug, Clone, Parser)]
#[command(name = "dani-harvester", version)]
pub struct Args {
    /// Output directory for JSON scraped from the site. It is removed and
    /// re-made on every run that does not pass `--skip-scrape`.
    #[arg(long, default_value = "data/")]
    pub data_dir: PathBuf,

    /// Do not scrape; only list what is already in `--data-dir`.
    #[arg(long)]
    pub skip_scrape: bool,

    /// IIDX version whose ranking is harvested.
    #[arg(long, default_value_t = DEFAULT_GAME_VERSION)]
    pub game_version: u32,

    /// First component of every artifact name.
    #[arg(long, default_value = "epolis")]
    pub artifact_prefix: String,

    /// Seconds to wait between two requests.
    #[arg(long, default_value_t = 5)]
    pub page_delay_secs: u64,

    /// Full pages accepted for one rank and play style before giving up.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: u32,

    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,

    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    #[arg(long, default_value = "dani-harvester.log")]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

impl Args {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            game_version: self.game_version,
            ..FetchSettings::default()
        }
    }

    pub fn harvest_settings(&self) -> HarvestSettings {
        HarvestSettings {
            page_delay: Duration::from_secs(self.page_delay_secs),
            max_pages: self.max_pages,
            artifact_prefix: self.artifact_prefix.clone(),
            ..HarvestSettings::default()
        }
    }
}
