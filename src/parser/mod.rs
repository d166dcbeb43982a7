pub mod category;
pub mod tags;

use chrono::{DateTime, Utc};

use crate::listing::PostFile;
use category::Category;

/// Default title when a post page has no `<h1>`.
pub const NO_TITLE: &str = "Không có tiêu đề";

/// Fields extracted from one post page. Lives for a single render cycle.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub subtitle: String,
    pub excerpt: String,
    pub date: String,
    pub thumbnail: Option<String>,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub category: Category,
}

/// Extract card fields from a post page. A field that cannot be found falls
/// back to its default; extraction never fails the post.
pub fn extract_post(html: &str, file: &PostFile) -> Post {
    let title = tags::first_h1(html).unwrap_or_else(|| NO_TITLE.to_string());
    let subtitle = tags::first_h2(html).unwrap_or_default();
    let excerpt = tags::first_p(html).unwrap_or_default();
    let date = tags::last_p(html).unwrap_or_default();

    // Marked <img> wins over the social-preview meta tag.
    let thumbnail = tags::thumbnail_img_src(html).or_else(|| tags::og_image_content(html));

    Post {
        title,
        subtitle,
        excerpt,
        date,
        thumbnail,
        filename: file.name.clone(),
        created_at: file.created_at,
        category: category::from_filename(&file.name),
    }
}

// ── Tests ──
