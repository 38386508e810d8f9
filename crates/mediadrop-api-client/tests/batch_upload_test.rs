//! Batched upload pipeline tests against a stub upload endpoint.
//!
//! The stub accepts the same multipart shape as the real API and fails any
//! file whose name contains "fail", so the tests can drive both the
//! all-success and the mixed-outcome paths over real HTTP.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mediadrop_api_client::{upload_all, ApiClient, UploadTask, BATCH_SIZE};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

async fn stub_upload(
    State(counter): State<Arc<AtomicUsize>>,
    mut multipart: Multipart,
) -> Response {
    counter.fetch_add(1, Ordering::SeqCst);

    let mut filename = String::new();
    while let Some(field) = multipart.next_field().await.expect("read field") {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or_default().to_string();
            let _ = field.bytes().await.expect("read bytes");
        }
    }

    if filename.contains("fail") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to upload file" })),
        )
            .into_response();
    }

    let record = serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "filename": filename,
        "alt": "stub",
        "url": format!("/uploads/{}", filename),
        "mime_type": "",
        "filesize": 4,
        "width": 0,
        "height": 0,
        "is_video": false,
        "created_at": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::CREATED, Json(record)).into_response()
}

async fn spawn_stub() -> (SocketAddr, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/uploads", post(stub_upload))
        .with_state(counter.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    (addr, counter)
}

fn write_files(dir: &TempDir, names: &[&str]) -> Vec<UploadTask> {
    names
        .iter()
        .map(|name| {
            let path: PathBuf = dir.path().join(name);
            std::fs::write(&path, b"data").expect("write test file");
            UploadTask::from_path(path)
        })
        .collect()
}

#[tokio::test]
async fn uploads_all_files_in_sequential_batches() {
    let (addr, counter) = spawn_stub().await;
    let client = ApiClient::new(format!("http://{}", addr)).expect("client");

    let dir = tempfile::tempdir().expect("tempdir");
    let names: Vec<String> = (0..12).map(|i| format!("photo_{}.png", i)).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut tasks = write_files(&dir, &name_refs);

    let mut progress = Vec::new();
    let summary = upload_all(&client, &mut tasks, |p| progress.push(p))
        .await
        .expect("upload run");

    assert_eq!(counter.load(Ordering::SeqCst), 12);
    assert_eq!(summary.total, 12);
    assert_eq!(summary.success_count, 12);
    assert_eq!(summary.failure_count, 0);
    assert!(summary.is_success());

    // One progress report per settled batch, ending at exactly 100.
    assert_eq!(progress.len(), 12usize.div_ceil(BATCH_SIZE));
    assert_eq!(progress, vec![42, 83, 100]);

    // Full success clears the selection.
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn failures_are_aggregated_without_blocking_siblings() {
    let (addr, counter) = spawn_stub().await;
    let client = ApiClient::new(format!("http://{}", addr)).expect("client");

    let dir = tempfile::tempdir().expect("tempdir");
    let mut tasks = write_files(
        &dir,
        &[
            "a.png",
            "fail_1.png",
            "b.png",
            "c.png",
            "fail_2.png",
            "d.png",
            "e.png",
        ],
    );

    let mut progress = Vec::new();
    let summary = upload_all(&client, &mut tasks, |p| progress.push(p))
        .await
        .expect("upload run");

    // Every file was attempted despite the failures in the first batch.
    assert_eq!(counter.load(Ordering::SeqCst), 7);
    assert_eq!(summary.success_count + summary.failure_count, 7);
    assert_eq!(summary.failure_count, 2);
    assert_eq!(
        summary.failure_message().unwrap(),
        "2 files failed to upload. 5 files uploaded successfully."
    );

    // Progress still advances past failed files.
    assert_eq!(progress, vec![71, 100]);

    // The selection is retained for manual reselection.
    assert_eq!(tasks.len(), 7);
}

#[tokio::test]
async fn missing_file_on_disk_counts_as_failure() {
    let (addr, counter) = spawn_stub().await;
    let client = ApiClient::new(format!("http://{}", addr)).expect("client");

    let dir = tempfile::tempdir().expect("tempdir");
    let mut tasks = write_files(&dir, &["ok.png"]);
    tasks.push(UploadTask::from_path(dir.path().join("never_written.png")));

    let summary = upload_all(&client, &mut tasks, |_| {})
        .await
        .expect("upload run");

    // The unreadable file never reaches the network.
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.failure_count, 1);
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn empty_selection_is_rejected_before_any_request() {
    let (addr, counter) = spawn_stub().await;
    let client = ApiClient::new(format!("http://{}", addr)).expect("client");

    let mut tasks: Vec<UploadTask> = Vec::new();
    let mut progress = Vec::new();
    let result = upload_all(&client, &mut tasks, |p| progress.push(p)).await;

    let err = result.expect_err("empty selection must be rejected");
    assert_eq!(err.to_string(), "Please select files to upload");
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert!(progress.is_empty());
}
