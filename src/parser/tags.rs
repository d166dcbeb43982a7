use std::sync::LazyLock;

use regex::Regex;

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").unwrap());
static P_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap());
static THUMB_IMG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img[^>]*class\s*=\s*["'][^"']*post-thumbnail[^"']*["'][^>]*>"#).unwrap()
});
static OG_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta[^>]*property\s*=\s*["']og:image["'][^>]*>"#).unwrap()
});
static SRC_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)src\s*=\s*["']([^"']*)["']"#).unwrap());
static CONTENT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)content\s*=\s*["']([^"']*)["']"#).unwrap());
static INNER_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Text of the first `<h1>`, if any.
pub fn first_h1(html: &str) -> Option<String> {
    first_text(html, &H1_RE)
}

/// Text of the first `<h2>`, if any.
pub fn first_h2(html: &str) -> Option<String> {
    first_text(html, &H2_RE)
}

/// Text of the first `<p>`, if any.
pub fn first_p(html: &str) -> Option<String> {
    first_text(html, &P_RE)
}

/// Text of the last `<p>` in the document. Post pages end with a date
/// paragraph.
pub fn last_p(html: &str) -> Option<String> {
    P_RE.captures_iter(html)
        .last()
        .map(|c| clean_text(&c[1]))
        .filter(|t| !t.is_empty())
}

/// `src` of the first `<img>` carrying the `post-thumbnail` marker class.
pub fn thumbnail_img_src(html: &str) -> Option<String> {
    let tag = THUMB_IMG_RE.find(html)?;
    attr(tag.as_str(), &SRC_ATTR_RE)
}

/// `content` of the `og:image` social-preview meta tag.
pub fn og_image_content(html: &str) -> Option<String> {
    let tag = OG_IMAGE_RE.find(html)?;
    attr(tag.as_str(), &CONTENT_ATTR_RE)
}

fn first_text(html: &str, re: &Regex) -> Option<String> {
    re.captures(html)
        .map(|c| clean_text(&c[1]))
        .filter(|t| !t.is_empty())
}

fn attr(tag_html: &str, re: &Regex) -> Option<String> {
    re.captures(tag_html)
        .map(|c| c[1].trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Inner text of a tag: nested tags stripped, entities decoded, whitespace
/// collapsed.
fn clean_text(inner: &str) -> String {
    let stripped = INNER_TAG_RE.replace_all(inner, " ");
    let decoded = decode_entities(&stripped);
    WS_RE.replace_all(decoded.trim(), " ").to_string()
}

/// Decode the entities that actually show up in the post pages.
pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_h1_plain() {
        let html = "<body><h1>Tiêu đề</h1><h1>Second</h1></body>";
        assert_eq!(first_h1(html).as_deref(), Some("Tiêu đề"));
    }

    #[test]
    fn first_h1_with_attributes_and_nested_tags() {
        let html = r#"<h1 class="text-3xl"><span>Khai trương</span> chi nhánh</h1>"#;
        assert_eq!(first_h1(html).as_deref(), Some("Khai trương chi nhánh"));
    }

    #[test]
    fn missing_h1_is_none() {
        assert_eq!(first_h1("<p>no heading here</p>"), None);
    }

    #[test]
    fn empty_h1_is_none() {
        assert_eq!(first_h1("<h1>   </h1>"), None);
    }

    #[test]
    fn first_and_last_p() {
        let html = "<p>First paragraph.</p><p>Middle.</p><p>15/01/2025</p>";
        assert_eq!(first_p(html).as_deref(), Some("First paragraph."));
        assert_eq!(last_p(html).as_deref(), Some("15/01/2025"));
    }

    #[test]
    fn single_p_is_both_first_and_last() {
        let html = "<p>Only one.</p>";
        assert_eq!(first_p(html), last_p(html));
    }

    #[test]
    fn entities_decoded() {
        let html = "<p>Khet &amp; friends &#39;25</p>";
        assert_eq!(first_p(html).as_deref(), Some("Khet & friends '25"));
    }

    #[test]
    fn whitespace_collapsed() {
        let html = "<p>\n  spread\n  over   lines\n</p>";
        assert_eq!(first_p(html).as_deref(), Some("spread over lines"));
    }

    #[test]
    fn thumbnail_src_from_marker_class() {
        let html = r#"<img src="/img/cover.jpg" class="w-full post-thumbnail" alt="">"#;
        assert_eq!(thumbnail_img_src(html).as_deref(), Some("/img/cover.jpg"));
    }

    #[test]
    fn unmarked_img_ignored() {
        let html = r#"<img src="/img/logo.png" class="logo" alt="">"#;
        assert_eq!(thumbnail_img_src(html), None);
    }

    #[test]
    fn og_image_content_lookup() {
        let html = r#"<meta property="og:image" content="https://cdn.example.com/share.png">"#;
        assert_eq!(
            og_image_content(html).as_deref(),
            Some("https://cdn.example.com/share.png")
        );
    }

    #[test]
    fn og_image_reversed_attribute_order() {
        let html = r#"<meta content="https://cdn.example.com/share.png" property="og:image">"#;
        assert_eq!(
            og_image_content(html).as_deref(),
            Some("https://cdn.example.com/share.png")
        );
    }
}
