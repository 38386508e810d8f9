//! Media classification.
//!
//! A closed classification over the declared MIME type and the filename,
//! replacing loosely-typed per-record flags. Precedence: video by MIME
//! prefix, then video by extension, then image by MIME prefix, then image
//! by extension, then `Other`. First match wins.

use serde::{Deserialize, Serialize};

use crate::filename::split_extension;

/// Extensions treated as video regardless of the declared MIME type.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm"];

/// Extensions treated as image when the MIME type is absent or unhelpful.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp"];

/// Classification result for an uploaded or stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn is_video(self) -> bool {
        self == MediaKind::Video
    }
}

fn extension_matches(filename: &str, extensions: &[&str]) -> bool {
    let (_, ext) = split_extension(filename);
    if ext.is_empty() {
        return false;
    }
    let ext = ext.to_ascii_lowercase();
    extensions.iter().any(|e| *e == ext)
}

/// Classify a file from its declared MIME type and filename.
///
/// `mime_type` may be empty or a generic type like `application/octet-stream`;
/// the extension check is the fallback for those cases.
pub fn classify_media(mime_type: &str, filename: &str) -> MediaKind {
    if mime_type.starts_with("video/") || extension_matches(filename, VIDEO_EXTENSIONS) {
        return MediaKind::Video;
    }
    if mime_type.starts_with("image/") || extension_matches(filename, IMAGE_EXTENSIONS) {
        return MediaKind::Image;
    }
    MediaKind::Other
}
