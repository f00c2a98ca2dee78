#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use ecr_scan_notifier::config::NotifierConfig;
use ecr_scan_notifier::errors::NotifierError;
use ecr_scan_notifier::models::{ScanSummary, SeverityCounts};
use ecr_scan_notifier::registry::FindingsSource;

type Received = Arc<Mutex<Vec<Value>>>;

/// In-process webhook that records every JSON body it receives.
pub struct FakeWebhook {
    pub url: String,
    received: Received,
}

impl FakeWebhook {
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

pub async fn spawn_webhook(status: StatusCode, body: &'static str) -> FakeWebhook {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/hook", post(receive))
        .with_state((received.clone(), status, body));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeWebhook { url: format!("http://{}/hook", addr), received }
}

async fn receive(
    State((received, status, reply)): State<(Received, StatusCode, &'static str)>,
    body: String,
) -> (StatusCode, &'static str) {
    received.lock().unwrap().push(serde_json::from_str(&body).unwrap_or(Value::Null));
    (status, reply)
}

/// URL of a local port with nothing listening on it.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/hook", addr)
}

pub struct StubSource {
    result: Result<ScanSummary, String>,
    calls: AtomicU32,
}

impl StubSource {
    pub fn ok(summary: ScanSummary) -> Arc<Self> {
        Arc::new(Self { result: Ok(summary), calls: AtomicU32::new(0) })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self { result: Err(message.to_string()), calls: AtomicU32::new(0) })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FindingsSource for StubSource {
    async fn fetch_findings(&self, _repository_name: &str, _image_digest: &str) -> Result<ScanSummary, NotifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(NotifierError::Fetch)
    }

    fn source_name(&self) -> &str { "stub" }
}

pub fn make_summary(counts: &[(&str, i64)]) -> ScanSummary {
    ScanSummary {
        registry_id: "123456789012".into(),
        repository_name: "app".into(),
        image_digest: "sha256:abc".into(),
        image_tags: vec!["latest".into()],
        scan_status_description: "The scan was completed successfully.".into(),
        scan_completed_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap()),
        vulnerability_source_updated_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        severity_counts: SeverityCounts::from_raw(counts.iter().map(|(k, v)| (*k, *v))),
    }
}

pub fn make_config(webhook_url: &str) -> NotifierConfig {
    NotifierConfig {
        region: "us-east-1".into(),
        channel: "#security".into(),
        webhook_url: webhook_url.to_string(),
    }
}

pub fn scan_event() -> Value {
    json!({
        "version": "0",
        "id": "85fc3613-e913-7fc4-a80c-a3753e4aa9ae",
        "detail-type": "ECR Image Scan",
        "source": "aws.ecr",
        "account": "123456789012",
        "time": "2024-03-01T12:30:05Z",
        "region": "us-east-1",
        "resources": ["arn:aws:ecr:us-east-1:123456789012:repository/app"],
        "detail": {
            "scan-status": "COMPLETE",
            "repository-name": "app",
            "image-digest": "sha256:abc",
            "image-tags": ["latest"]
        }
    })
}

/// Log sink shared between a test and its thread-local subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Install a capturing subscriber for the current thread.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
