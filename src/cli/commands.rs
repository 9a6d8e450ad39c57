//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "darkwrite")]
#[command(about = "Local blog authoring tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new post (saved as a draft unless --publish)
    New {
        /// Post title
        #[arg(short, long)]
        title: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,

        /// Publish immediately
        #[arg(long)]
        publish: bool,
    },

    /// Change an existing post
    Edit {
        /// Post id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        body: OptionalBodyArgs,

        /// Replace tags with these (repeatable)
        #[arg(long = "tag", value_name = "TAG", conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,

        /// New cover image URL
        #[arg(long, conflicts_with = "no_cover")]
        cover: Option<String>,

        /// Remove the cover image
        #[arg(long)]
        no_cover: bool,
    },

    /// List posts
    List {
        /// Only published posts
        #[arg(long, conflicts_with = "drafts")]
        published: bool,

        /// Only drafts
        #[arg(long)]
        drafts: bool,

        /// Case-insensitive text to find in title or content
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts carrying this tag (repeatable, all must match)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show a single post
    Show {
        /// Post id
        id: String,
    },

    /// Delete a post permanently
    Delete {
        /// Post id
        id: String,
    },

    /// Toggle a post between published and draft
    Publish {
        /// Post id
        id: String,
    },

    /// List every tag in use
    Tags {
        /// Only tags on published posts
        #[arg(long)]
        published: bool,
    },

    /// Print the excerpt generated for some content
    Excerpt {
        /// Content to summarize
        content: String,

        /// Maximum excerpt length (default: configured or 150)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Post body for `new`: inline or read from a file
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct BodyArgs {
    /// Post content (markup)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read post content from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Post body for `edit`: optional
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
pub struct OptionalBodyArgs {
    /// New post content (markup)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read new post content from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
