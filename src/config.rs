/// Coordinates of the repository holding the post files.
///
/// Owner, repo and path are fixed for the production site but overridable
/// from the command line for staging repos.
#[derive(Debug, Clone)]
pub struct Source {
    pub owner: String,
    pub repo: String,
    pub posts_path: String,
    pub max_posts: usize,
}

pub const DEFAULT_OWNER: &str = "text-2";
pub const DEFAULT_REPO: &str = "khet";
pub const DEFAULT_POSTS_PATH: &str = "post";
pub const DEFAULT_MAX_POSTS: usize = 3;

/// GitHub rejects requests without a User-Agent.
pub const USER_AGENT: &str = concat!("blog_loader/", env!("CARGO_PKG_VERSION"));

impl Source {
    /// GitHub contents API endpoint for the posts directory.
    pub fn contents_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.owner, self.repo, self.posts_path
        )
    }

    /// Site-relative URL a card links to.
    pub fn post_url(&self, filename: &str) -> String {
        format!("{}/{}", self.posts_path, filename)
    }
}

impl Default for Source {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            posts_path: DEFAULT_POSTS_PATH.to_string(),
            max_posts: DEFAULT_MAX_POSTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_url() {
        let source = Source::default();
        assert_eq!(
            source.contents_url(),
            "https://api.github.com/repos/text-2/khet/contents/post"
        );
    }

    #[test]
    fn post_url() {
        let source = Source::default();
        assert_eq!(source.post_url("tin-tuc-1.html"), "post/tin-tuc-1.html");
    }
}
