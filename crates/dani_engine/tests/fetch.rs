mod common;

use std::time::Duration;

use dani_core::{DanRank, FetchRequest, PlayStyle, RESULT_LIMIT};
use dani_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RANKING_PATH: &str = "/game/2dx/31/ranking/json/dani.html";

fn fetcher_for(server: &MockServer) -> ReqwestFetcher {
    let settings = FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    };
    ReqwestFetcher::new(settings).expect("fetcher builds")
}

#[tokio::test]
async fn fetcher_posts_form_with_browser_headers() {
    common::init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RANKING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(common::page_body(2), "application/json; charset=UTF-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server);
    let rank = DanRank::new(18, "皆伝");
    let request = FetchRequest::new(&rank, PlayStyle::Dp, 0, RESULT_LIMIT);

    let output = fetcher.fetch(&request).await.expect("fetch ok");
    assert_eq!(output.body, common::page_body(2).into_bytes());
    assert!(output.content_type.unwrap().starts_with("application/json"));

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let sent = &received[0];
    let header = |name: &str| {
        sent.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(
        header("accept").as_deref(),
        Some("application/json, text/javascript, */*; q=0.01")
    );
    assert_eq!(
        header("content-type").as_deref(),
        Some("application/x-www-form-urlencoded; charset=UTF-8")
    );
    assert_eq!(header("xmlhttprequest").as_deref(), Some("XMLHttpRequest"));
    assert!(header("user-agent").unwrap().contains("Firefox"));
    assert_eq!(
        header("referer"),
        Some(format!(
            "{}/game/2dx/31/ranking/dani.html?grade_id=18&display=1&play_style=1",
            server.uri()
        ))
    );
    assert_eq!(
        String::from_utf8(sent.body.clone()).unwrap(),
        "grade_id=18&play_style=1&page=0&limit=50000&release_9_10_kaiden=2"
    );
}

#[tokio::test]
async fn fetcher_reports_status_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RANKING_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("under maintenance"))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server);
    let rank = DanRank::new(0, "七級");
    let request = FetchRequest::new(&rank, PlayStyle::Sp, 0, RESULT_LIMIT);

    let err = fetcher.fetch(&request).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.message, "under maintenance");
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RANKING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{\"list\":[]}"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).unwrap();
    let rank = DanRank::new(1, "六級");
    let request = FetchRequest::new(&rank, PlayStyle::Sp, 0, RESULT_LIMIT);

    let err = fetcher.fetch(&request).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RANKING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"list\":[1,2,3]}"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).unwrap();
    let rank = DanRank::new(2, "五級");
    let request = FetchRequest::new(&rank, PlayStyle::Sp, 0, RESULT_LIMIT);

    let err = fetcher.fetch(&request).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }));
}

#[test]
fn fetcher_rejects_invalid_base_url() {
    let settings = FetchSettings {
        base_url: "not a url".to_string(),
        ..FetchSettings::default()
    };
    let err = ReqwestFetcher::new(settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
