//! Error types for darkwrite

use crate::domain::PostId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for darkwrite
#[derive(Debug, Error)]
pub enum DarkwriteError {
    #[error("Not a darkwrite directory: {0}")]
    NotDarkwriteDirectory(PathBuf),

    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Failed to load posts: {0}")]
    StorageUnreadable(String),

    #[error("Failed to save posts: {0}")]
    StorageWriteFailed(String),

    #[error("Could not generate a unique post id after {0} attempts")]
    IdCollision(usize),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DarkwriteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DarkwriteError::NotDarkwriteDirectory(_) => 2,
            DarkwriteError::Validation(_) => 3,
            DarkwriteError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// True when the error means the targeted post does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DarkwriteError::NotFound(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DarkwriteError::NotDarkwriteDirectory(path) => {
                format!(
                    "Not a darkwrite directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'darkwrite init' in this directory to start a new blog\n\
                    • Navigate to an existing darkwrite directory\n\
                    • Set DARKWRITE_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            DarkwriteError::NotFound(id) => {
                format!(
                    "Post not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'darkwrite list' to see post ids\n\
                    • The post may have been deleted",
                    id
                )
            }
            DarkwriteError::StorageUnreadable(msg) => {
                format!(
                    "Failed to load posts: {}\n\n\
                    Suggestions:\n\
                    • Check .darkwrite/darkwrite-posts.json for manual edits\n\
                    • Move the file aside to start with an empty collection",
                    msg
                )
            }
            DarkwriteError::StorageWriteFailed(msg) => {
                format!(
                    "Failed to save posts: {}\n\n\
                    Your previous posts are unchanged.\n\
                    Suggestions:\n\
                    • Check free disk space and permissions on .darkwrite/",
                    msg
                )
            }
            DarkwriteError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: darkwrite config excerpt_length 200",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DarkwriteError
pub type Result<T> = std::result::Result<T, DarkwriteError>;
