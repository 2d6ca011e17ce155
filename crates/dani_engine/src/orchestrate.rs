use std::fs;
use std::path::{Path, PathBuf};

use dani_core::{DanRank, PlayStyle};
use dani_logging::{dani_info, dani_warn};

use crate::{HarvestError, PageHarvester};

/// Walks every (play style, rank) pair through one [`PageHarvester`].
pub struct HarvestOrchestrator<'a> {
    harvester: PageHarvester<'a>,
}

impl<'a> HarvestOrchestrator<'a> {
    pub fn new(harvester: PageHarvester<'a>) -> Self {
        Self { harvester }
    }

    /// Play style major, rank minor, in the order given. Stops at the first
    /// failing pair without touching the remaining ones.
    pub async fn scrape(
        &self,
        ranks: &[DanRank],
        play_styles: &[PlayStyle],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, HarvestError> {
        let mut all_files = Vec::new();
        let mut first_pair = true;
        for &play_style in play_styles {
            for rank in ranks {
                // The service sees one request stream, so pairs are spaced
                // like pages are.
                if !first_pair {
                    self.harvester.pause().await;
                }
                first_pair = false;
                all_files.extend(self.harvester.harvest(rank, play_style, output_dir).await?);
            }
        }
        dani_info!("Harvest wrote {} artifact(s)", all_files.len());
        Ok(all_files)
    }
}

/// Every entry directly under `data_dir`, unfiltered, in directory order.
pub fn read_existing(data_dir: &Path) -> Result<Vec<PathBuf>, HarvestError> {
    dani_warn!("skipping scrape and reading local data from {}", data_dir.display());
    let read_dir_error = |source| HarvestError::ReadDir {
        path: data_dir.to_path_buf(),
        source,
    };
    fs::read_dir(data_dir)
        .map_err(read_dir_error)?
        .map(|entry| entry.map(|e| e.path()).map_err(read_dir_error))
        .collect()
}
