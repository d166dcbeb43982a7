use chrono::{DateTime, Utc};

use crate::config::Source;
use crate::parser::Post;

/// Shown when the listing contains no qualifying post files.
const EMPTY_STATE: &str = r#"<div class="col-span-full text-center py-12">
    <i class="fas fa-newspaper text-4xl text-gray-400 mb-4"></i>
    <p class="text-gray-600">Chưa có bài đăng nào</p>
</div>
"#;

/// Wires the cards after injection: refreshes the scroll-reveal library if
/// the page loads one, and opens a card's post in a new tab on click with a
/// short press effect. Clicks inside an explicit read-more link are left to
/// the link itself.
const CARD_SCRIPT: &str = r#"<script>
(function () {
    if (typeof AOS !== 'undefined') {
        AOS.refresh();
    }
    document.querySelectorAll('.blog-post-card').forEach(function (card) {
        card.addEventListener('click', function (e) {
            if (e.target.closest('.read-more-link')) {
                return;
            }
            var postUrl = card.getAttribute('data-post-url');
            if (!postUrl) {
                return;
            }
            card.style.transform = 'scale(0.98)';
            card.style.opacity = '0.8';
            setTimeout(function () {
                window.open(postUrl, '_blank');
                card.style.transform = '';
                card.style.opacity = '';
            }, 150);
        });
    });
})();
</script>
"#;

/// Render the blog section: one card per post, or the empty state.
pub fn posts_section(posts: &[Post], source: &Source) -> String {
    if posts.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut out = String::new();
    for (index, post) in posts.iter().enumerate() {
        out.push_str(&card(post, index, source));
    }
    out.push_str(CARD_SCRIPT);
    out
}

/// One static card shown when the live pipeline fails.
pub fn fallback_section(source: &Source) -> String {
    let mut out = format!(
        r#"<div class="bg-white rounded-xl shadow-lg overflow-hidden transform hover:scale-105 transition-all duration-300 cursor-pointer blog-post-card" data-aos="fade-up" data-post-url="{post_url}">
    <div class="relative h-48 overflow-hidden">
        <img src="https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&h=400&fit=crop" alt="Khet Entertainment Team" class="w-full h-full object-cover transition-transform duration-300 hover:scale-110">
        <div class="absolute top-4 left-4">
            <span class="bg-red-100 text-red-600 px-3 py-1 rounded-full text-sm font-semibold">Tin tức</span>
        </div>
        <div class="absolute top-4 right-4">
            <span class="bg-black/50 text-white px-3 py-1 rounded-full text-sm">15/01/2025</span>
        </div>
    </div>
    <div class="p-6 pt-4">
        <h3 class="text-xl font-bold text-gray-800 mb-3 line-clamp-2">Khet Entertainment - Hành trình phát triển</h3>
        <p class="text-gray-600 mb-4 line-clamp-3">Với hơn 300 trang và kênh, 100+ kênh YouTube, 100+ tài khoản TikTok và 200+ sản phẩm, Khet Entertainment đã và đang khẳng định vị thế của mình trong ngành công nghiệp giải trí số.</p>
        <div class="flex items-center justify-between">
            <span class="text-red-600 font-semibold">Đọc thêm</span>
            <i class="fas fa-arrow-right text-red-600"></i>
        </div>
    </div>
</div>
"#,
        post_url = escape(&source.post_url("bai-viet-1.html")),
    );
    out.push_str(CARD_SCRIPT);
    out
}

fn card(post: &Post, index: usize, source: &Source) -> String {
    let badge = format!(
        r#"<span class="bg-{color}-100 text-{color}-600 px-3 py-1 rounded-full text-sm font-semibold">{name}</span>"#,
        color = post.category.color,
        name = escape(post.category.name),
    );
    let date = format_date(&post.created_at);

    let header = match &post.thumbnail {
        Some(thumbnail) => format!(
            r#"    <div class="relative h-48 overflow-hidden">
        <img src="{src}" alt="{alt}" class="w-full h-full object-cover transition-transform duration-300 hover:scale-110">
        <div class="absolute top-4 left-4">
            {badge}
        </div>
        <div class="absolute top-4 right-4">
            <span class="bg-black/50 text-white px-3 py-1 rounded-full text-sm">{date}</span>
        </div>
    </div>
"#,
            src = escape(thumbnail),
            alt = escape(&post.title),
            badge = badge,
            date = date,
        ),
        None => format!(
            r#"    <div class="p-6 pb-0">
        <div class="flex items-center mb-4">
            {badge}
            <span class="text-gray-500 text-sm ml-auto">{date}</span>
        </div>
    </div>
"#,
            badge = badge,
            date = date,
        ),
    };

    format!(
        r#"<div class="bg-white rounded-xl shadow-lg overflow-hidden transform hover:scale-105 transition-all duration-300 cursor-pointer blog-post-card" data-aos="fade-up" data-aos-delay="{delay}" data-post-url="{post_url}">
{header}    <div class="p-6{body_pad}">
        <h3 class="text-xl font-bold text-gray-800 mb-3 line-clamp-2">{title}</h3>
        <p class="text-gray-600 mb-4 line-clamp-3">{excerpt}</p>
        <div class="flex items-center justify-between">
            <span class="text-red-600 font-semibold">Đọc thêm</span>
            <i class="fas fa-arrow-right text-red-600"></i>
        </div>
    </div>
</div>
"#,
        delay = index * 100,
        post_url = escape(&source.post_url(&post.filename)),
        header = header,
        body_pad = if post.thumbnail.is_some() { " pt-4" } else { "" },
        title = escape(&post.title),
        excerpt = escape(&post.excerpt),
    )
}

/// dd/mm/yyyy, as the site shows dates.
pub fn format_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%d/%m/%Y").to_string()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Tests ──
