use anyhow::{Context, Result};
use futures::future::try_join_all;
use reqwest::Client;
use tracing::info;

use crate::config::{Source, USER_AGENT};
use crate::listing::PostFile;
use crate::parser::{self, Post};

/// Shared HTTP client for the listing and content calls.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch the newest `source.max_posts` files concurrently and extract a
/// [`Post`] from each. The join is all-or-nothing: one failed fetch fails
/// the whole batch.
pub async fn fetch_latest_posts(
    client: &Client,
    source: &Source,
    files: &[PostFile],
) -> Result<Vec<Post>> {
    let latest = latest_files(files, source.max_posts);
    info!("Loading content for {} post(s)", latest.len());
    try_join_all(latest.iter().map(|file| load_post_content(client, file))).await
}

/// The first `max` files of an already-sorted listing.
fn latest_files(files: &[PostFile], max: usize) -> &[PostFile] {
    &files[..files.len().min(max)]
}

/// Fetch one post page and extract its card fields.
pub async fn load_post_content(client: &Client, file: &PostFile) -> Result<Post> {
    let html = client
        .get(&file.download_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("Failed to fetch post content for {}", file.name))?;

    Ok(parser::extract_post(&html, file))
}

// ── Tests ──
