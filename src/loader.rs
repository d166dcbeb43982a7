use anyhow::Result;
use reqwest::Client;
use tracing::error;

use crate::config::Source;
use crate::content;
use crate::listing;
use crate::parser::Post;
use crate::render;

/// Stages 1–3: listing fetch, descending sort, content fetch for the newest
/// files. Single attempt end to end.
pub async fn load_posts(client: &Client, source: &Source) -> Result<Vec<Post>> {
    let files = listing::fetch_post_files(client, source).await?;
    let sorted = listing::sort_files_by_date(files);
    content::fetch_latest_posts(client, source, &sorted).await
}

/// Stages 4–5: render the cards, or — on any pipeline error — log it and
/// render the static fallback card. Error kinds are not differentiated in
/// the output.
pub fn render_outcome(outcome: Result<Vec<Post>>, source: &Source) -> String {
    match outcome {
        Ok(posts) => render::posts_section(&posts, source),
        Err(e) => {
            error!("Error loading posts: {:#}", e);
            render::fallback_section(source)
        }
    }
}

// ── Tests ──
