//! Domain methods for the Mediadrop API client.
//!
//! Response types are re-exported from `mediadrop_core::models`; the login
//! wrapper type is defined here to match the API handler shape.

use crate::ApiClient;
use anyhow::{Context, Result};
use mediadrop_core::models::{GalleryItem, MediaRecord, UserResponse};
use mediadrop_core::{derive_alt_text, filename::DEFAULT_ALT_TEXT};
use std::path::Path;

/// Login response: the authenticated user, including its role.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
}

/// Share link response.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ShareResponse {
    pub url: String,
}

impl ApiClient {
    /// Log in; the session cookie lands in the client's cookie jar.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserResponse> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self.post_json("/api/auth/login", &body).await?;
        Ok(response.user)
    }

    /// Log out and invalidate the current session.
    pub async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self.post_empty("/api/auth/logout").await?;
        Ok(())
    }

    /// Fetch the authenticated user.
    pub async fn me(&self) -> Result<UserResponse> {
        self.get("/api/auth/me", &[]).await
    }

    /// Upload one file from a local path, deriving alt text from the
    /// filename the same way the server would.
    pub async fn upload_file(&self, file_path: &Path) -> Result<MediaRecord> {
        if file_path
            .components()
            .any(|c| c == std::path::Component::ParentDir)
        {
            return Err(anyhow::anyhow!("Invalid input: {}", file_path.display()));
        }

        let buffer = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let filename = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_ALT_TEXT)
            .to_string();
        let alt = derive_alt_text(&filename);

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(buffer).file_name(filename),
            )
            .text("alt", alt);

        self.post_multipart("/api/uploads", form).await
    }

    /// Fetch the merged gallery (custom records first).
    pub async fn gallery(&self) -> Result<Vec<GalleryItem>> {
        self.get("/api/gallery", &[]).await
    }

    /// List custom media with a limit (capped server-side at 100).
    pub async fn list_custom_media(&self, limit: i64) -> Result<Vec<MediaRecord>> {
        self.get("/api/custom-media", &[("limit", limit.to_string())])
            .await
    }

    /// Public URL of the deployment, for sharing.
    pub async fn share_url(&self) -> Result<String> {
        let response: ShareResponse = self.get("/api/share", &[]).await?;
        Ok(response.url)
    }
}
