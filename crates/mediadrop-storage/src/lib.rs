//! Mediadrop Storage Library
//!
//! Storage abstraction for uploaded files. The only backend is the local
//! filesystem: files land in a flat public directory and are served
//! straight from it.
//!
//! # Storage key format
//!
//! A storage key is the generated filename itself (`{uuid}.{ext}`). Keys
//! must not contain `..`, `/`, or `\`; the local backend validates this
//! before touching the filesystem.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
