//! Domain layer - Post records, excerpts and listing filters

pub mod excerpt;
pub mod post;
pub mod query;

pub use excerpt::{generate_excerpt, strip_markup, DEFAULT_EXCERPT_LENGTH};
pub use post::{NewPost, Post, PostId, PostPatch};
pub use query::{collect_tags, PostFilter, StatusFilter};
