//! Mediadrop CLI, a command-line client for the Mediadrop API.
//!
//! Set MEDIADROP_URL (default http://localhost:3000). Commands that need a
//! session log in with MEDIADROP_EMAIL and MEDIADROP_PASSWORD.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediadrop_api_client::{upload_all, ApiClient, UploadTask, GALLERY_REDIRECT_DELAY};
use mediadrop_cli::{format_file_size, init_tracing};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "mediadrop", about = "Mediadrop API CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload files in batches, with progress
    Upload {
        /// Paths of the files to upload
        files: Vec<std::path::PathBuf>,
    },
    /// Fetch the merged gallery
    Gallery,
    /// Show the authenticated user
    Me,
    /// Show the public share link for this deployment
    Share,
    /// Invalidate the current session
    Logout,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

/// Log in using MEDIADROP_EMAIL / MEDIADROP_PASSWORD.
async fn authenticate(client: &ApiClient) -> anyhow::Result<()> {
    let email = std::env::var("MEDIADROP_EMAIL")
        .context("Missing credentials. Set MEDIADROP_EMAIL and MEDIADROP_PASSWORD")?;
    let password = std::env::var("MEDIADROP_PASSWORD")
        .context("Missing credentials. Set MEDIADROP_EMAIL and MEDIADROP_PASSWORD")?;

    let user = client.login(&email, &password).await?;
    tracing::debug!(user_id = %user.id, role = %user.role, "Logged in");
    Ok(())
}

async fn run_upload(client: &ApiClient, files: Vec<std::path::PathBuf>) -> anyhow::Result<()> {
    let mut tasks: Vec<UploadTask> = files.into_iter().map(UploadTask::from_path).collect();

    println!("Selected Files ({})", tasks.len());
    for task in &tasks {
        let size = std::fs::metadata(&task.path).map(|m| m.len()).unwrap_or(0);
        println!("  {}  {}", task.label, format_file_size(size));
    }

    let summary = upload_all(client, &mut tasks, |progress| {
        println!("Uploading... {}%", progress);
    })
    .await?;

    match summary.failure_message() {
        None => {
            println!("Upload successful! Redirecting to gallery...");
            tokio::time::sleep(GALLERY_REDIRECT_DELAY).await;
            let gallery = client.gallery().await?;
            println!(
                "{} {}",
                gallery.len(),
                if gallery.len() == 1 { "item" } else { "items" }
            );
            print_json(&gallery)?;
        }
        Some(message) => {
            anyhow::bail!(message);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env().context("Failed to create API client")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload { files } => {
            authenticate(&client).await?;
            run_upload(&client, files).await?;
        }
        Commands::Gallery => {
            authenticate(&client).await?;
            let response = client.gallery().await?;
            print_json(&response)?;
        }
        Commands::Me => {
            authenticate(&client).await?;
            let response = client.me().await?;
            print_json(&response)?;
        }
        Commands::Share => {
            let url = client.share_url().await?;
            print_json(&serde_json::json!({ "url": url }))?;
        }
        Commands::Logout => {
            authenticate(&client).await?;
            client.logout().await?;
            print_json(&serde_json::json!({ "success": true }))?;
        }
    }

    Ok(())
}
