use sonic_check::{mock, CheckRunner, HttpOutcome, ProbeTarget, RestProber};
use std::net::SocketAddr;

async fn spawn_mock() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock::router()).await.unwrap();
    });
    addr
}

fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn test_end_to_end_probe_against_live_mock() {
    let addr = spawn_mock().await;

    let target = ProbeTarget::with_ports("127.0.0.1".to_string(), addr.port(), closed_port());
    let runner = CheckRunner::new(RestProber::new().unwrap(), target);

    let mut buf = Vec::new();
    runner.run(&mut buf).await.unwrap();
    let report = String::from_utf8(buf).unwrap();

    // Root path is unrouted on the mock, but it must answer with an HTTP
    // status rather than a transport failure
    assert!(report.contains("Result: 404"));
    assert!(!report.contains("Result: error"));

    // Telemetry pretty-prints the fixed snapshot
    assert!(report.contains("JSON (pretty):"));
    assert!(report.contains("\"hostname\": \"mock-sonic\""));
    assert!(report.contains("\"admin\": \"up\""));

    // The auxiliary port is never served by the mock
    assert!(report.contains("gRPC port open?: false"));

    // Config simulation echoes the demo payload
    assert!(report.contains("POST status: 200"));
    assert!(report.contains(r#""demo":"test""#));
    assert!(report.ends_with("Note: This probe is safe and intended for lab use only.\n"));
}

#[tokio::test]
async fn test_end_to_end_probe_against_unreachable_host() {
    // 未綁定的連接埠：所有 HTTP 探測應立即被拒絕
    let dead_port = closed_port();

    let target = ProbeTarget::with_ports("127.0.0.1".to_string(), dead_port, closed_port());
    let runner = CheckRunner::new(RestProber::new().unwrap(), target);

    let mut buf = Vec::new();
    let result = runner.run(&mut buf).await;
    let report = String::from_utf8(buf).unwrap();

    // The sequence completes despite every probe failing
    assert!(result.is_ok());
    assert_eq!(report.matches("Result: error").count(), 2);
    assert!(report.contains("gRPC port open?: false"));
    assert!(report.contains("POST error:"));
    assert!(report.ends_with("Note: This probe is safe and intended for lab use only.\n"));
}

#[tokio::test]
async fn test_tcp_probe_sees_open_rest_port() {
    let addr = spawn_mock().await;

    // 把輔助連接埠指到 mock 本身，連線應當成功
    let target = ProbeTarget::with_ports("127.0.0.1".to_string(), addr.port(), addr.port());
    let runner = CheckRunner::new(RestProber::new().unwrap(), target);

    let mut buf = Vec::new();
    runner.run(&mut buf).await.unwrap();
    let report = String::from_utf8(buf).unwrap();

    assert!(report.contains("gRPC port open?: true"));
}

#[tokio::test]
async fn test_prober_outcomes_against_live_mock() {
    use sonic_check::domain::ports::Prober;

    let addr = spawn_mock().await;
    let prober = RestProber::new().unwrap();

    let outcome = prober
        .http_get(&format!("http://127.0.0.1:{}/restconf/data", addr.port()))
        .await;
    match outcome {
        HttpOutcome::Success { status, body } => {
            assert_eq!(status, 200);
            let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(parsed["hostname"], "mock-sonic");
        }
        HttpOutcome::Failed { reason } => panic!("expected success, got: {}", reason),
    }
}
