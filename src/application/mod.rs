//! Application layer - Use cases and orchestration

pub mod compose;
pub mod init;
pub mod manage_config;
pub mod repository;

pub use compose::{ComposeService, Draft, Revision};
pub use manage_config::ConfigService;
pub use repository::{PostListing, PostLookup, PostRepository};
