//! Filtering of post listings by status, text and tags

use crate::domain::Post;
use std::collections::HashSet;
use std::str::FromStr;

/// Which publish states a listing includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Drafts,
}

impl StatusFilter {
    fn admits(&self, post: &Post) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => post.published,
            StatusFilter::Drafts => !post.published,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "published" => Ok(StatusFilter::Published),
            "drafts" | "draft" => Ok(StatusFilter::Drafts),
            _ => Err(format!(
                "Invalid status: '{}'. Valid values: all, published, drafts",
                s
            )),
        }
    }
}

/// Listing filter.
///
/// A post matches when its status is admitted, the text query (if any)
/// occurs case-insensitively in its title or content, and it carries every
/// requested tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub status: StatusFilter,
    pub text: Option<String>,
    pub tags: Vec<String>,
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        if !self.status.admits(post) {
            return false;
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            if !post.title.to_lowercase().contains(&needle)
                && !post.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        self.tags.iter().all(|tag| post.tags.contains(tag))
    }

    /// Keep matching posts, preserving their relative order.
    pub fn apply(&self, mut posts: Vec<Post>) -> Vec<Post> {
        posts.retain(|post| self.matches(post));
        posts
    }
}

/// Every distinct tag across `posts`, in first-seen order.
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in posts.iter().flat_map(|post| &post.tags) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}
