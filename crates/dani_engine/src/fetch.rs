use std::time::Duration;

use bytes::Bytes;
use dani_core::{FetchRequest, RankingEndpoint, DEFAULT_BASE_URL, DEFAULT_GAME_VERSION};
use dani_logging::{dani_debug, dani_info};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE, REFERER, USER_AGENT};

use crate::{FailureKind, FetchError, FetchOutput};

const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const XHR_HEADER: &str = "XMLHttpRequest";
const FIREFOX_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:131.0) Gecko/20100101 Firefox/131.0";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub game_version: u32,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            game_version: DEFAULT_GAME_VERSION,
            user_agent: FIREFOX_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(10),
            // A 50000 row ranking takes the server a while to render.
            request_timeout: Duration::from_secs(120),
            max_bytes: 256 * 1024 * 1024,
        }
    }
}

/// The HTTP call behind every ranking page.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &FetchRequest<'_>) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    endpoint: RankingEndpoint,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let endpoint = RankingEndpoint::new(&settings.base_url, settings.game_version)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, request: &FetchRequest<'_>) -> Result<FetchOutput, FetchError> {
        let form = serde_urlencoded::to_string(&request.form_fields()[..])
            .map_err(|err| FetchError::new(FailureKind::InvalidRequest, err.to_string()))?;
        let referer = self.endpoint.referer_url(request.rank, request.play_style);
        dani_debug!("POST {} form={}", self.endpoint.request_url(), form);

        let response = self
            .client
            .post(self.endpoint.request_url())
            .header(ACCEPT, ACCEPT_JSON)
            .header(REFERER, referer.as_str())
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .header(XHR_HEADER, XHR_HEADER)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        dani_info!("response: {} content-type: {:?}", status, content_type);

        if !status.is_success() {
            let body = status_body(response.text().await);
            return Err(FetchError::new(FailureKind::HttpStatus(status.as_u16()), body));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(FetchOutput {
            content_type,
            body: Bytes::from(body),
        })
    }
}

/// Message for a non-success response: the body as sent, or why it could not be read.
fn status_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|err| format!("<unreadable body: {err}>"))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
