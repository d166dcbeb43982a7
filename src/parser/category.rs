/// Badge shown on a post card. `color` is a Tailwind palette name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,
}

pub const NEWS: Category = Category { name: "Tin tức", color: "red" };
pub const ECOSYSTEM: Category = Category { name: "Hệ sinh thái", color: "blue" };
pub const PARTNER: Category = Category { name: "Đối tác", color: "green" };
pub const DEFAULT: Category = Category { name: "Bài viết", color: "gray" };

/// Classify a post by filename keywords. Checks are ordered and exclusive:
/// the first matching pair wins.
pub fn from_filename(filename: &str) -> Category {
    if filename.contains("tin-tuc") || filename.contains("news") {
        NEWS
    } else if filename.contains("he-sinh-thai") || filename.contains("ecosystem") {
        ECOSYSTEM
    } else if filename.contains("doi-tac") || filename.contains("partner") {
        PARTNER
    } else {
        DEFAULT
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_keyword_classifies_independently() {
        assert_eq!(from_filename("tin-tuc-khai-truong.html"), NEWS);
        assert_eq!(from_filename("company-news-2025.html"), NEWS);
        assert_eq!(from_filename("he-sinh-thai-moi.html"), ECOSYSTEM);
        assert_eq!(from_filename("ecosystem-update.html"), ECOSYSTEM);
        assert_eq!(from_filename("doi-tac-chien-luoc.html"), PARTNER);
        assert_eq!(from_filename("new-partner.html"), PARTNER);
    }

    #[test]
    fn unmatched_filename_gets_default() {
        assert_eq!(from_filename("bai-viet-1.html"), DEFAULT);
        assert_eq!(from_filename("hello.html"), DEFAULT);
    }

    #[test]
    fn first_match_wins_over_later_keywords() {
        // Matches both the news and the partner pair; news is checked first.
        assert_eq!(from_filename("tin-tuc-doi-tac.html"), NEWS);
        // Matches ecosystem and partner; ecosystem is checked first.
        assert_eq!(from_filename("he-sinh-thai-partner.html"), ECOSYSTEM);
    }

    #[test]
    fn colors_match_badges() {
        assert_eq!(NEWS.color, "red");
        assert_eq!(ECOSYSTEM.color, "blue");
        assert_eq!(PARTNER.color, "green");
        assert_eq!(DEFAULT.color, "gray");
    }
}
