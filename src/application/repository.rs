//! Post repository
//!
//! Owns the post collection. Every read loads the collection fresh from the
//! store; every write loads it, changes it and persists the whole thing.
//! There is no cache, and no locking beyond what the store itself does: one
//! caller is expected to await each operation before issuing the next.
//!
//! Reads never fail. An unreadable store degrades to an empty result and the
//! failure is handed back as a non-fatal `load_error`. Writes refuse to run
//! on an unreadable store so the old blob is not overwritten.

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::{DarkwriteError, Result};
use crate::infrastructure::{
    Clock, Config, FileStore, IdGenerator, PostStore, RandomIdGenerator, SystemClock, Workspace,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::Duration;

/// Attempts at drawing an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// Result of a listing: the posts that could be loaded, plus the load
/// failure if the store could not be read.
#[derive(Debug, Default)]
pub struct PostListing {
    pub posts: Vec<Post>,
    pub load_error: Option<DarkwriteError>,
}

impl PostListing {
    fn loaded(posts: Vec<Post>) -> Self {
        PostListing {
            posts,
            load_error: None,
        }
    }

    fn degraded(error: DarkwriteError) -> Self {
        PostListing {
            posts: Vec::new(),
            load_error: Some(error),
        }
    }

    /// True when the store could not be read and `posts` is a stand-in
    pub fn is_degraded(&self) -> bool {
        self.load_error.is_some()
    }
}

/// Result of a lookup by id: the post if it was found, plus the load
/// failure if the store could not be read.
#[derive(Debug, Default)]
pub struct PostLookup {
    pub post: Option<Post>,
    pub load_error: Option<DarkwriteError>,
}

impl PostLookup {
    /// True when the store could not be read, so a missing `post` says
    /// nothing about whether it exists
    pub fn is_degraded(&self) -> bool {
        self.load_error.is_some()
    }
}

pub struct PostRepository<S, C = SystemClock, G = RandomIdGenerator> {
    store: S,
    clock: C,
    ids: G,
    read_delay: Duration,
    write_delay: Duration,
}

impl<S: PostStore> PostRepository<S> {
    /// Repository over `store` using wall-clock time and random ids
    pub fn new(store: S) -> Self {
        PostRepository::with_parts(store, SystemClock, RandomIdGenerator)
    }
}

impl PostRepository<FileStore> {
    /// Repository over a workspace's post file, with the configured delays
    pub fn open(workspace: &Workspace, config: &Config) -> Self {
        PostRepository::new(workspace.store()).with_delays(config.read_delay(), config.write_delay())
    }
}

impl<S: PostStore, C: Clock, G: IdGenerator> PostRepository<S, C, G> {
    pub fn with_parts(store: S, clock: C, ids: G) -> Self {
        PostRepository {
            store,
            clock,
            ids,
            read_delay: Duration::ZERO,
            write_delay: Duration::ZERO,
        }
    }

    /// Artificial latency applied before each read and write
    pub fn with_delays(mut self, read: Duration, write: Duration) -> Self {
        self.read_delay = read;
        self.write_delay = write;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every post in stored order
    pub async fn list_all(&self) -> PostListing {
        pause(self.read_delay).await;

        match self.load() {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "loaded posts");
                PostListing::loaded(posts)
            }
            Err(e) => {
                tracing::warn!(error = %e, "post store unreadable, listing nothing");
                PostListing::degraded(e)
            }
        }
    }

    /// Published posts in stored order
    pub async fn list_published(&self) -> PostListing {
        let mut listing = self.list_all().await;
        listing.posts.retain(|post| post.published);
        listing
    }

    /// The post with `id`, if there is one
    pub async fn get_by_id(&self, id: &PostId) -> PostLookup {
        pause(self.read_delay).await;

        match self.load() {
            Ok(posts) => PostLookup {
                post: posts.into_iter().find(|post| &post.id == id),
                load_error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, %id, "post store unreadable, treating post as missing");
                PostLookup {
                    post: None,
                    load_error: Some(e),
                }
            }
        }
    }

    /// Store a new post under a fresh id
    pub async fn create(&self, fields: NewPost) -> Result<Post> {
        pause(self.write_delay).await;

        let mut posts = self.load()?;
        let id = self.unused_id(&posts)?;
        let post = Post::from_new(id, fields, self.clock.now());

        posts.push(post.clone());
        self.persist(&posts)?;

        tracing::info!(id = %post.id, published = post.published, "created post");
        Ok(post)
    }

    /// Overwrite the fields set in `patch` and refresh `updated_at`
    pub async fn update(&self, id: &PostId, patch: PostPatch) -> Result<Post> {
        pause(self.write_delay).await;

        let mut posts = self.load()?;
        let post = posts
            .iter_mut()
            .find(|post| &post.id == id)
            .ok_or_else(|| DarkwriteError::NotFound(id.clone()))?;

        post.apply(patch);
        post.updated_at = self.next_timestamp(post.updated_at);
        let updated = post.clone();

        self.persist(&posts)?;

        tracing::info!(%id, "updated post");
        Ok(updated)
    }

    /// Remove the post with `id` for good
    pub async fn delete(&self, id: &PostId) -> Result<()> {
        pause(self.write_delay).await;

        let mut posts = self.load()?;
        let before = posts.len();
        posts.retain(|post| &post.id != id);

        if posts.len() == before {
            return Err(DarkwriteError::NotFound(id.clone()));
        }

        self.persist(&posts)?;

        tracing::info!(%id, "deleted post");
        Ok(())
    }

    /// Flip the publish state and return the updated post
    pub async fn toggle_publish(&self, id: &PostId) -> Result<Post> {
        let current = self
            .load()?
            .into_iter()
            .find(|post| &post.id == id)
            .ok_or_else(|| DarkwriteError::NotFound(id.clone()))?;

        self.update(id, PostPatch::default().published(!current.published))
            .await
    }

    fn load(&self) -> Result<Vec<Post>> {
        let bytes = self
            .store
            .read()
            .map_err(|e| DarkwriteError::StorageUnreadable(e.to_string()))?;

        match bytes {
            None => Ok(Vec::new()),
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                DarkwriteError::StorageUnreadable(format!("malformed post data: {}", e))
            }),
        }
    }

    fn persist(&self, posts: &[Post]) -> Result<()> {
        let bytes = serde_json::to_vec(posts)
            .map_err(|e| DarkwriteError::StorageWriteFailed(e.to_string()))?;

        self.store.write(&bytes).map_err(|e| {
            tracing::error!(error = %e, count = posts.len(), "post store rejected write");
            DarkwriteError::StorageWriteFailed(e.to_string())
        })?;

        tracing::debug!(count = posts.len(), bytes = bytes.len(), "persisted posts");
        Ok(())
    }

    fn unused_id(&self, posts: &[Post]) -> Result<PostId> {
        let taken: HashSet<&PostId> = posts.iter().map(|post| &post.id).collect();

        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.generate();
            if !taken.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(id = %candidate, "generated id already taken");
        }

        Err(DarkwriteError::IdCollision(MAX_ID_ATTEMPTS))
    }

    /// Current time, bumped past `previous` if the clock has not moved on
    fn next_timestamp(&self, previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = self.clock.now();
        if now > previous {
            now
        } else {
            previous + chrono::Duration::milliseconds(1)
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
