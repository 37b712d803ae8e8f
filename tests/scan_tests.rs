use portsweep::scanner::{scan, scan_with, NoProgress, ScanRequest};
use portsweep::{PortError, ScanError, ScanMode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

async fn open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

async fn closed_port() -> u16 {
    let (listener, port) = open_port().await;
    drop(listener);
    port
}

#[tokio::test]
async fn single_open_port() {
    let (_listener, port) = open_port().await;

    let report = scan(&ScanRequest::new("127.0.0.1", port.to_string()).with_mode("default"))
        .await
        .unwrap();

    assert_eq!(report.mode, ScanMode::Default);
    assert!(!report.cancelled);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].port.as_u16(), port);
    assert!(report.results[0].open);
}

#[tokio::test]
async fn open_and_closed_ports_keep_request_order() {
    let (_listener, open) = open_port().await;
    let closed = closed_port().await;

    for spec in [format!("{open},{closed}"), format!("{closed},{open}")] {
        let request = ScanRequest::new("127.0.0.1", spec.clone()).with_timeout_ms(500);
        let report = scan(&request).await.unwrap();

        let got: Vec<(u16, bool)> = report
            .results
            .iter()
            .map(|r| (r.port.as_u16(), r.open))
            .collect();
        let expected: Vec<(u16, bool)> = spec
            .split(',')
            .map(|p| p.parse::<u16>().unwrap())
            .map(|p| (p, p == open))
            .collect();
        assert_eq!(got, expected, "spec {spec}");
    }
}

#[tokio::test]
async fn ordering_holds_for_every_mode() {
    let (_a, first) = open_port().await;
    let (_b, second) = open_port().await;
    let closed = closed_port().await;
    let spec = format!("{second},{closed},{first}");

    for mode in ScanMode::ALL {
        let request = ScanRequest::new("127.0.0.1", spec.as_str())
            .with_mode(mode.name())
            .with_timeout_ms(300);
        let report = scan(&request).await.unwrap();

        let ports: Vec<u16> = report.results.iter().map(|r| r.port.as_u16()).collect();
        assert_eq!(ports, vec![second, closed, first]);
        let open: Vec<bool> = report.results.iter().map(|r| r.open).collect();
        assert_eq!(open, vec![true, false, true]);
    }
}

#[tokio::test]
async fn unknown_mode_still_scans() {
    let (_listener, port) = open_port().await;

    let report = scan(&ScanRequest::new("127.0.0.1", port.to_string()).with_mode("turbo"))
        .await
        .unwrap();

    assert_eq!(report.mode, ScanMode::Default);
    assert!(report.results[0].open);
}

#[tokio::test]
async fn malformed_ports_fail_the_scan() {
    let cases = [
        ("82-80", true),
        ("0-80", true),
        ("80-65536", true),
        ("abc-80", false),
        ("", false),
        ("80,443-445,22", false),
    ];

    for (spec, is_range_error) in cases {
        let err = scan(&ScanRequest::new("127.0.0.1", spec)).await.unwrap_err();
        match err {
            ScanError::Port(PortError::InvalidRange(_)) => assert!(is_range_error, "{spec:?}"),
            ScanError::Port(PortError::InvalidFormat(_)) => assert!(!is_range_error, "{spec:?}"),
            other => panic!("unexpected error for {spec:?}: {other}"),
        }
    }
}

#[tokio::test]
async fn progress_fires_once_per_port() {
    let closed = closed_port().await;
    let (_listener, open) = open_port().await;
    let counter = Arc::new(AtomicUsize::new(0));

    let request = ScanRequest::new("127.0.0.1", format!("{open},{closed},{open}"))
        .with_timeout_ms(300);
    let report = scan_with(&request, counter.clone(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(counter.load(Ordering::Relaxed), 2);
}

#[tokio::test]
async fn cancelled_before_start_reports_nothing() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = scan_with(
        &ScanRequest::new("127.0.0.1", "1-100"),
        Arc::new(NoProgress),
        cancel,
    )
    .await
    .unwrap();

    assert!(report.cancelled);
    assert!(report.results.is_empty());
}
