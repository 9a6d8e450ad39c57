//! Compose use case: the editor's save flow
//!
//! Checks what the author typed, derives the excerpt and hands the result to
//! the repository. The repository itself accepts blank titles and duplicate
//! tags; these rules live here.

use crate::application::repository::PostRepository;
use crate::domain::{generate_excerpt, NewPost, Post, PostId, PostPatch};
use crate::error::{DarkwriteError, Result};
use crate::infrastructure::{Clock, IdGenerator, PostStore};

/// What the author entered for a new post
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
}

/// What the author changed on an existing post
#[derive(Debug, Clone, Default)]
pub struct Revision {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<Option<String>>,
}

/// Service for saving posts from author input
pub struct ComposeService<'a, S, C, G> {
    repository: &'a PostRepository<S, C, G>,
    excerpt_length: usize,
}

impl<'a, S: PostStore, C: Clock, G: IdGenerator> ComposeService<'a, S, C, G> {
    pub fn new(repository: &'a PostRepository<S, C, G>, excerpt_length: usize) -> Self {
        ComposeService {
            repository,
            excerpt_length,
        }
    }

    /// Save a new post. It stays a draft unless `publish` is set.
    pub async fn create(&self, draft: Draft, publish: bool) -> Result<Post> {
        validate_title(&draft.title)?;
        validate_content(&draft.content)?;

        let fields = NewPost {
            excerpt: generate_excerpt(&draft.content, self.excerpt_length),
            title: draft.title,
            content: draft.content,
            cover_image: normalize_cover(draft.cover_image),
            tags: normalize_tags(draft.tags),
            published: publish,
        };

        self.repository.create(fields).await
    }

    /// Save changes to an existing post. The excerpt is regenerated only when
    /// the content changes.
    pub async fn revise(&self, id: &PostId, revision: Revision) -> Result<Post> {
        let mut patch = PostPatch::default();

        if let Some(title) = revision.title {
            validate_title(&title)?;
            patch = patch.title(title);
        }
        if let Some(content) = revision.content {
            validate_content(&content)?;
            patch = patch
                .excerpt(generate_excerpt(&content, self.excerpt_length))
                .content(content);
        }
        if let Some(tags) = revision.tags {
            patch = patch.tags(normalize_tags(tags));
        }
        if let Some(cover) = revision.cover_image {
            patch = patch.cover_image(normalize_cover(cover));
        }

        if patch.is_empty() {
            return Err(DarkwriteError::Validation("Nothing to change".to_string()));
        }

        self.repository.update(id, patch).await
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(DarkwriteError::Validation(
            "Please add a title to your post".to_string(),
        ));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(DarkwriteError::Validation(
            "Post content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Trim tags, drop empty ones and repeats; first occurrence wins.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !result.iter().any(|t| t == tag) {
            result.push(tag.to_string());
        }
    }
    result
}

fn normalize_cover(cover: Option<String>) -> Option<String> {
    cover
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
