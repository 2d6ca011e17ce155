use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use dani_core::PlayStyle;

use crate::decode::DecodeError;
use crate::persist::PersistError;

/// Raw successful response of one ranking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    /// For `HttpStatus` this is the response body as the server sent it.
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidRequest,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Progress of a harvest, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestEvent {
    PageRequested {
        rank: String,
        play_style: PlayStyle,
        page: u32,
    },
    PageWritten {
        path: PathBuf,
        page: u32,
        records: usize,
    },
    Pausing {
        delay: Duration,
    },
    PairCompleted {
        rank: String,
        play_style: PlayStyle,
        pages: u32,
    },
}

/// Every way a harvest run can stop. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("ranking request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("ranking response rejected: {0}")]
    Decode(#[from] DecodeError),
    /// Not produced for pages of `serde_json::Value` records, whose
    /// serialization is infallible.
    #[error("could not serialize page: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write artifact: {0}")]
    Persist(#[from] PersistError),
    #[error("{rank} {play_style} still returned full pages after {max_pages} pages")]
    PageCapExceeded {
        rank: String,
        play_style: PlayStyle,
        max_pages: u32,
    },
    #[error("could not list {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not start runtime: {0}")]
    Runtime(#[source] io::Error),
}
