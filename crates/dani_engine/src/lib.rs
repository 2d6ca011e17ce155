//! Dani engine: ranking fetch, per-page persistence and the harvest loop.
mod decode;
mod engine;
mod fetch;
mod filename;
mod harvest;
mod orchestrate;
mod pace;
mod persist;
mod progress;
mod types;

pub use decode::{decode_page, decode_text, DecodeError};
pub use engine::{HarvestEngine, RunMode};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::artifact_filename;
pub use harvest::{HarvestSettings, PageHarvester};
pub use orchestrate::{read_existing, HarvestOrchestrator};
pub use pace::{Pacer, TokioPacer};
pub use persist::{
    ensure_output_dir, require_output_dir, reset_output_dir, AtomicFileWriter, PersistError,
};
pub use progress::{LoggingProgressSink, ProgressSink};
pub use types::{FailureKind, FetchError, FetchOutput, HarvestError, HarvestEvent};
