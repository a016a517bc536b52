#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::State;
use axum::http::{header, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use watchtower_api::{app_state::AppState, config, ops, router, Handler};

async fn scrape(h: &Handler) -> String {
    let resp = ops::metrics(State(h.registry())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; version=0.0.4; charset=utf-8"
    );
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn has_line(body: &str, line: &str) -> bool {
    body.lines().any(|l| l == line)
}

#[tokio::test]
async fn scan_then_render() {
    let h = Handler::new().unwrap();
    h.metrics().register_scan(3.0, 2.0, 1.0);

    let body = scrape(&h).await;
    assert!(has_line(&body, "watchtower_containers_scanned 3"));
    assert!(has_line(&body, "watchtower_containers_updated 2"));
    assert!(has_line(&body, "watchtower_containers_failed 1"));
    assert!(has_line(&body, "watchtower_scans_total 1"));
    assert!(has_line(&body, "watchtower_scans_skipped 0"));
}

#[tokio::test]
async fn two_skips_leave_gauges_at_zero() {
    let h = Handler::new().unwrap();
    h.metrics().register_skipped();
    h.metrics().register_skipped();

    let body = scrape(&h).await;
    assert!(has_line(&body, "watchtower_scans_total 2"));
    assert!(has_line(&body, "watchtower_scans_skipped 2"));
    assert!(has_line(&body, "watchtower_containers_scanned 0"));
    assert!(has_line(&body, "watchtower_containers_updated 0"));
    assert!(has_line(&body, "watchtower_containers_failed 0"));
}

#[tokio::test]
async fn skip_after_scan_keeps_gauges() {
    let h = Handler::new().unwrap();
    h.metrics().register_scan(5.0, 5.0, 0.0);
    h.metrics().register_skipped();

    let body = scrape(&h).await;
    assert!(has_line(&body, "watchtower_scans_total 2"));
    assert!(has_line(&body, "watchtower_scans_skipped 1"));
    assert!(has_line(&body, "watchtower_containers_scanned 5"));
    assert!(has_line(&body, "watchtower_containers_updated 5"));
    assert!(has_line(&body, "watchtower_containers_failed 0"));
}

#[tokio::test]
async fn help_and_type_lines_are_verbatim() {
    let h = Handler::new().unwrap();
    let body = scrape(&h).await;

    let expected = [
        "# HELP watchtower_containers_scanned Number of containers scanned for changes by watchtower during the last scan",
        "# TYPE watchtower_containers_scanned gauge",
        "# HELP watchtower_containers_updated Number of containers updated by watchtower during the last scan",
        "# TYPE watchtower_containers_updated gauge",
        "# HELP watchtower_containers_failed Number of containers where update failed during the last scan",
        "# TYPE watchtower_containers_failed gauge",
        "# HELP watchtower_scans_total Number of scans since the watchtower started",
        "# TYPE watchtower_scans_total counter",
        "# HELP watchtower_scans_skipped Number of skipped scans since watchtower started",
        "# TYPE watchtower_scans_skipped counter",
    ];
    for line in expected {
        assert!(has_line(&body, line), "missing line: {line}");
    }
    assert_eq!(body.lines().count(), 15);
}

#[tokio::test]
async fn scrape_is_read_only() {
    let h = Handler::new().unwrap();
    h.metrics().register_scan(9.0, 3.0, 1.0);
    let first = scrape(&h).await;
    let second = scrape(&h).await;
    assert_eq!(first, second);
    assert_eq!(h.metrics().total(), 1);
}

#[tokio::test]
async fn served_over_http() {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let state = AppState::new(cfg).unwrap();
    state.metrics().register_scan(3.0, 2.0, 1.0);
    let app = router::build_router(&state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /v1/metrics HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {raw}");
    assert!(raw.contains("watchtower_containers_scanned 3\n"));
    assert!(raw.contains("watchtower_scans_total 1\n"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let state = AppState::new(cfg).unwrap();
    let app = router::build_router(&state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /metrics HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    assert!(raw.starts_with("HTTP/1.1 404"), "unexpected response: {raw}");
}
