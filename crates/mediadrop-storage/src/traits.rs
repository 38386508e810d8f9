//! Storage abstraction trait
//!
//! This module defines the Storage trait that storage backends implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The upload endpoint writes through this trait so the persistence layer
/// stays decoupled from the filesystem layout. Keys are flat generated
/// filenames; see the crate root documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a file under `storage_key` and return its public URL.
    async fn upload(&self, storage_key: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read a file by its storage key.
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Delete a file by its storage key. Deleting a missing file is not an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Public URL for a storage key (no filesystem access).
    fn url_for(&self, storage_key: &str) -> String;
}
