use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::Source;

/// Non-success HTTP status on the listing call.
#[derive(Debug, Error)]
#[error("listing request failed with status {status}")]
pub struct ListingError {
    pub status: StatusCode,
}

/// One entry of the GitHub contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PostFile {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
}

/// Fetch the posts directory listing and return the `.html` file entries.
/// Single attempt; a non-success status is a [`ListingError`].
pub async fn fetch_post_files(client: &Client, source: &Source) -> Result<Vec<PostFile>> {
    let url = source.contents_url();
    info!("Fetching post listing: {}", url);

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ListingError { status }.into());
    }

    let entries: Vec<PostFile> = response
        .json()
        .await
        .context("Failed to decode post listing")?;
    info!("Total entries in listing: {}", entries.len());

    let files = filter_post_files(entries);
    info!("Post files after filtering: {}", files.len());
    Ok(files)
}

/// Keep only file-type entries named `*.html`.
pub fn filter_post_files(entries: Vec<PostFile>) -> Vec<PostFile> {
    entries
        .into_iter()
        .filter(|f| f.kind == "file" && f.name.ends_with(".html"))
        .collect()
}

/// Sort descending by creation time (newest first). Tie order is not
/// significant.
pub fn sort_files_by_date(mut files: Vec<PostFile>) -> Vec<PostFile> {
    files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    files
}

// ── Tests ──
