//! Domain models shared across crates.

pub mod media;
pub mod user;

pub use media::{GalleryItem, MediaRecord, NewMediaRecord, StandardMediaRecord};
pub use user::{User, UserResponse, UserRole};
