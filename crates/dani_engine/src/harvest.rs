use std::path::{Path, PathBuf};
use std::time::Duration;

use dani_core::{is_final_page, DanRank, FetchRequest, PlayStyle, RESULT_LIMIT};
use dani_logging::{dani_debug, dani_info};

use crate::decode::decode_page;
use crate::filename::artifact_filename;
use crate::persist::{require_output_dir, AtomicFileWriter};
use crate::{Fetcher, HarvestError, HarvestEvent, Pacer, ProgressSink};

#[derive(Debug, Clone)]
pub struct HarvestSettings {
    /// Rows asked for on every request. See [`RESULT_LIMIT`].
    pub limit: u32,
    /// Minimum spacing between two requests.
    pub page_delay: Duration,
    /// Full pages tolerated for one pair before giving up. At least one page
    /// is always requested.
    pub max_pages: u32,
    pub artifact_prefix: String,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            limit: RESULT_LIMIT,
            page_delay: Duration::from_secs(5),
            max_pages: 100,
            artifact_prefix: "epolis".to_string(),
        }
    }
}

/// Fetches and stores every page of one (rank, play style) pair.
pub struct PageHarvester<'a> {
    fetcher: &'a dyn Fetcher,
    pacer: &'a dyn Pacer,
    sink: &'a dyn ProgressSink,
    settings: HarvestSettings,
}

impl<'a> PageHarvester<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        pacer: &'a dyn Pacer,
        sink: &'a dyn ProgressSink,
        settings: HarvestSettings,
    ) -> Self {
        Self {
            fetcher,
            pacer,
            sink,
            settings,
        }
    }

    /// Returns the artifacts written, in page order.
    ///
    /// The first failure ends the harvest; pages already written stay on disk.
    pub async fn harvest(
        &self,
        rank: &DanRank,
        play_style: PlayStyle,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, HarvestError> {
        require_output_dir(output_dir)?;
        dani_info!("Getting {} data for {}", rank, play_style);

        let writer = AtomicFileWriter::new(output_dir.to_path_buf());
        let mut written = Vec::new();
        let mut request = FetchRequest::new(rank, play_style, 0, self.settings.limit);

        // `page` does not paginate on the server side: every page returns the
        // head of the ranking. `limit` is oversized so that the first response
        // is already short, which is what ends the loop.
        loop {
            self.sink.emit(HarvestEvent::PageRequested {
                rank: rank.name.clone(),
                play_style,
                page: request.page,
            });
            dani_debug!("{:?}", request.form_fields());

            let output = self.fetcher.fetch(&request).await?;
            let records = decode_page(&output.body, output.content_type.as_deref())?;
            let content = serde_json::to_string_pretty(&records)?;

            let filename = artifact_filename(
                &self.settings.artifact_prefix,
                rank,
                play_style,
                request.page,
            );
            let path = writer.write(&filename, &content)?;
            self.sink.emit(HarvestEvent::PageWritten {
                path: path.clone(),
                page: request.page,
                records: records.len(),
            });
            written.push(path);

            if is_final_page(records.len(), request.limit) {
                break;
            }
            if request.page + 1 >= self.settings.max_pages {
                return Err(HarvestError::PageCapExceeded {
                    rank: rank.name.clone(),
                    play_style,
                    max_pages: self.settings.max_pages,
                });
            }

            self.pause().await;
            request = request.next_page();
        }

        self.sink.emit(HarvestEvent::PairCompleted {
            rank: rank.name.clone(),
            play_style,
            pages: request.page + 1,
        });
        Ok(written)
    }

    pub(crate) async fn pause(&self) {
        let delay = self.settings.page_delay;
        self.sink.emit(HarvestEvent::Pausing { delay });
        self.pacer.pause(delay).await;
    }
}
