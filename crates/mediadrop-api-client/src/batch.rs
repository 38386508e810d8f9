//! Batched upload pipeline.
//!
//! Uploads a file selection in fixed-size batches: batches run strictly in
//! sequence, files within a batch upload concurrently, and an individual
//! failure never cancels or blocks its siblings. Outcomes are aggregated
//! into success/failure counters with a progress callback per settled
//! batch; there is no retry state, no cancellation, and no per-upload
//! timeout beyond the client default.

use crate::ApiClient;
use anyhow::Result;
use futures::future;
use std::path::PathBuf;
use std::time::Duration;

/// Files uploaded concurrently per batch. Fixed, not configurable.
pub const BATCH_SIZE: usize = 5;

/// How long a caller should keep the success message visible before
/// switching to the gallery view.
pub const GALLERY_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// One selected file, alive only for the duration of the upload run.
#[derive(Debug, Clone)]
pub struct UploadTask {
    pub path: PathBuf,
    /// Display label, normally the filename.
    pub label: String,
}

impl UploadTask {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        UploadTask { path, label }
    }
}

/// Aggregate outcome of an upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub total: usize,
    pub success_count: usize,
    pub failure_count: usize,
}

impl UploadSummary {
    pub fn is_success(&self) -> bool {
        self.failure_count == 0
    }

    /// The user-facing failure summary; None when every upload succeeded.
    pub fn failure_message(&self) -> Option<String> {
        if self.failure_count == 0 {
            return None;
        }
        Some(format!(
            "{} files failed to upload. {} files uploaded successfully.",
            self.failure_count, self.success_count
        ))
    }
}

/// Progress after `completed` of `total` files have settled, as a rounded
/// percentage. Settled counts both successes and failures.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    (100.0 * completed as f64 / total as f64).round() as u8
}

/// Upload one file, converting any error into a failed outcome. Errors are
/// logged here and never propagate to the batch loop.
async fn upload_single(client: &ApiClient, task: &UploadTask) -> bool {
    match client.upload_file(&task.path).await {
        Ok(record) => {
            tracing::debug!(media_id = %record.id, label = %task.label, "Uploaded");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, label = %task.label, "Upload failed");
            false
        }
    }
}

/// Upload all tasks in batches of [`BATCH_SIZE`], reporting progress after
/// each batch settles.
///
/// On full success the task list is cleared; on any failure it is left
/// untouched so the caller can show what was selected (failed files must
/// be reselected manually, there is no automatic retry).
///
/// An empty selection is rejected before any network activity.
pub async fn upload_all(
    client: &ApiClient,
    tasks: &mut Vec<UploadTask>,
    mut on_progress: impl FnMut(u8),
) -> Result<UploadSummary> {
    if tasks.is_empty() {
        return Err(anyhow::anyhow!("Please select files to upload"));
    }

    let total = tasks.len();
    let mut success_count = 0;
    let mut failure_count = 0;
    let mut completed = 0;

    for batch in tasks.chunks(BATCH_SIZE) {
        let results =
            future::join_all(batch.iter().map(|task| upload_single(client, task))).await;

        for succeeded in results {
            if succeeded {
                success_count += 1;
            } else {
                failure_count += 1;
            }
        }

        completed += batch.len();
        on_progress(progress_percent(completed, total));
    }

    tracing::info!(total, success_count, failure_count, "Upload run finished");

    if failure_count == 0 {
        tasks.clear();
    }

    Ok(UploadSummary {
        total,
        success_count,
        failure_count,
    })
}
