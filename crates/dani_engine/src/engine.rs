use std::path::{Path, PathBuf};

use dani_core::{DanRank, PlayStyle};
use tokio::runtime::Runtime;

use crate::fetch::{FetchSettings, ReqwestFetcher};
use crate::orchestrate::{read_existing, HarvestOrchestrator};
use crate::{HarvestError, HarvestSettings, LoggingProgressSink, PageHarvester, TokioPacer};

/// What a run does with the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Harvest every rank under every play style into the directory.
    Scrape { ranks: Vec<DanRank> },
    /// Only list what a previous harvest left in the directory.
    Replay,
}

/// Production wiring: reqwest, tokio timer pacing and log-based progress.
///
/// Requests go out one at a time on a current-thread runtime owned by the
/// engine, so there is never more than one in flight.
pub struct HarvestEngine {
    runtime: Runtime,
    fetcher: ReqwestFetcher,
    pacer: TokioPacer,
    sink: LoggingProgressSink,
    settings: HarvestSettings,
}

impl HarvestEngine {
    pub fn new(fetch: FetchSettings, settings: HarvestSettings) -> Result<Self, HarvestError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HarvestError::Runtime)?;
        Ok(Self {
            runtime,
            fetcher: ReqwestFetcher::new(fetch)?,
            pacer: TokioPacer,
            sink: LoggingProgressSink,
            settings,
        })
    }

    /// Runs to completion on the calling thread.
    pub fn run(&self, mode: RunMode, data_dir: &Path) -> Result<Vec<PathBuf>, HarvestError> {
        match mode {
            RunMode::Replay => read_existing(data_dir),
            RunMode::Scrape { ranks } => {
                let harvester = PageHarvester::new(
                    &self.fetcher,
                    &self.pacer,
                    &self.sink,
                    self.settings.clone(),
                );
                let orchestrator = HarvestOrchestrator::new(harvester);
                self.runtime
                    .block_on(orchestrator.scrape(&ranks, &PlayStyle::ALL, data_dir))
            }
        }
    }
}
