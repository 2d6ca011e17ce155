#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Mutex, Once};
use std::time::Duration;

use bytes::Bytes;
use dani_core::{FetchRequest, PlayStyle};
use dani_engine::{
    FailureKind, FetchError, FetchOutput, Fetcher, HarvestEvent, Pacer, ProgressSink,
};
use serde_json::json;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dani_logging::initialize_for_tests);
}

/// JSON body the ranking service would send for `count` rows.
pub fn page_body(count: usize) -> String {
    let list: Vec<_> = (0..count)
        .map(|i| json!({ "djname": format!("DJ{i}"), "pref": "東京都", "rank": i + 1 }))
        .collect();
    json!({ "list": list, "count": count }).to_string()
}

pub fn ok_page(count: usize) -> Result<FetchOutput, FetchError> {
    ok_body(page_body(count))
}

pub fn ok_body(body: impl Into<String>) -> Result<FetchOutput, FetchError> {
    Ok(FetchOutput {
        content_type: Some("application/json; charset=UTF-8".to_string()),
        body: Bytes::from(body.into()),
    })
}

pub fn http_status(code: u16, body: &str) -> Result<FetchOutput, FetchError> {
    Err(FetchError::new(FailureKind::HttpStatus(code), body))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub grade_id: u32,
    pub play_style: PlayStyle,
    pub page: u32,
    pub limit: u32,
}

/// Replays scripted responses in order; once the script runs out it answers
/// every call with `fallback` rows.
pub struct StubFetcher {
    script: Mutex<VecDeque<Result<FetchOutput, FetchError>>>,
    fallback: Option<usize>,
    seen: Mutex<Vec<SeenRequest>>,
}

impl StubFetcher {
    pub fn scripted(responses: Vec<Result<FetchOutput, FetchError>>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            fallback: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn always(count: usize) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Some(count),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, request: &FetchRequest<'_>) -> Result<FetchOutput, FetchError> {
        self.seen.lock().unwrap().push(SeenRequest {
            grade_id: request.rank.grade_id,
            play_style: request.play_style,
            page: request.page,
            limit: request.limit,
        });
        let next = self.script.lock().unwrap().pop_front();
        match (next, self.fallback) {
            (Some(response), _) => response,
            (None, Some(count)) => ok_page(count),
            (None, None) => panic!("stub fetcher called more often than scripted"),
        }
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses.lock().unwrap().push(delay);
    }
}

#[derive(Default)]
pub struct TestSink {
    events: Mutex<Vec<HarvestEvent>>,
}

impl TestSink {
    pub fn take(&self) -> Vec<HarvestEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: HarvestEvent) {
        self.events.lock().unwrap().push(event);
    }
}
