//! Output formatting utilities

use crate::domain::Post;
use chrono::{DateTime, Utc};

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn status_label(post: &Post) -> &'static str {
    if post.published {
        "published"
    } else {
        "draft"
    }
}

/// Format a list of posts for display, one line each
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{}  {:<9}  {}  {}\n",
            post.id,
            status_label(post),
            post.created_at.format("%Y-%m-%d"),
            post.title
        ));
    }
    output
}

/// Format a single post with its metadata and full content
pub fn format_post_detail(post: &Post) -> String {
    let mut output = format!("# {}\n\n", post.title);

    output.push_str(&format!("id:        {}\n", post.id));
    output.push_str(&format!("status:    {}\n", status_label(post)));
    output.push_str(&format!("created:   {}\n", format_date(post.created_at)));
    output.push_str(&format!("updated:   {}\n", format_date(post.updated_at)));
    if !post.tags.is_empty() {
        output.push_str(&format!("tags:      {}\n", post.tags.join(", ")));
    }
    if let Some(cover) = &post.cover_image {
        output.push_str(&format!("cover:     {}\n", cover));
    }

    output.push_str(&format!("\n{}\n", post.content));
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}
