//! darkwrite - Local blog authoring tool
//!
//! Posts with tags and a cover image, kept as one JSON collection on the
//! local disk. The post repository owns the collection and its lifecycle:
//! draft, published, unpublished, deleted.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::{PostListing, PostLookup, PostRepository};
pub use domain::{generate_excerpt, NewPost, Post, PostId, PostPatch};
pub use error::DarkwriteError;
