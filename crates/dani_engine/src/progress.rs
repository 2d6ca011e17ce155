use dani_logging::{dani_debug, dani_info};

use crate::HarvestEvent;

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: HarvestEvent);
}

/// Reports progress through the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProgressSink;

impl ProgressSink for LoggingProgressSink {
    fn emit(&self, event: HarvestEvent) {
        match event {
            HarvestEvent::PageRequested {
                rank,
                play_style,
                page,
            } => {
                dani_info!("Getting {} data for {} page {}", rank, play_style, page);
            }
            HarvestEvent::PageWritten {
                path,
                page,
                records,
            } => {
                dani_info!("page {} dj count: {} -> {}", page, records, path.display());
            }
            HarvestEvent::Pausing { delay } => {
                dani_debug!("pausing {:?} before next request", delay);
            }
            HarvestEvent::PairCompleted {
                rank,
                play_style,
                pages,
            } => {
                dani_info!("Finished {} {} after {} page(s)", rank, play_style, pages);
            }
        }
    }
}
