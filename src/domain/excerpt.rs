//! Excerpt generation
//!
//! An excerpt is a short, tag-stripped preview of a post's content. It is
//! computed by whoever saves the post; the repository stores it as given.

use regex::Regex;
use std::sync::OnceLock;

/// Excerpt length used when nothing else is configured
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

const ELLIPSIS: &str = "...";

fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // A dangling `<` swallows the rest of the text, same as an unclosed tag.
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>?").unwrap())
}

/// Remove markup tags, leaving the text between them.
pub fn strip_markup(content: &str) -> String {
    markup_regex().replace_all(content, "").into_owned()
}

/// Strip markup from `content` and shorten it to at most `max_len` characters.
///
/// Text that already fits is returned as-is. Longer text is cut at the last
/// whitespace at or before `max_len` and gets `...` appended, so a word is
/// never split. Lengths count characters, not bytes.
pub fn generate_excerpt(content: &str, max_len: usize) -> String {
    let text = strip_markup(content);

    if text.chars().count() <= max_len {
        return text;
    }

    // The character right after the window counts as a boundary too.
    let window: String = text.chars().take(max_len + 1).collect();
    let cut = window
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0);

    let mut excerpt = window[..cut].trim_end().to_string();
    excerpt.push_str(ELLIPSIS);
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<h1>Title</h1><p>Some <strong>bold</strong> text</p>"),
            "TitleSome bold text"
        );
    }

    #[test]
    fn test_strip_unclosed_tag() {
        assert_eq!(strip_markup("before <img src=\"x\""), "before ");
    }

    #[test]
    fn test_short_content_passes_through() {
        let excerpt = generate_excerpt("<p>Just a few words.</p>", DEFAULT_EXCERPT_LENGTH);
        assert_eq!(excerpt, "Just a few words.");
    }

    #[test]
    fn test_exact_length_has_no_ellipsis() {
        assert_eq!(generate_excerpt("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncates_at_word_boundary() {
        let content = format!("<p>{}</p>", "word ".repeat(40));
        let excerpt = generate_excerpt(&content, 20);

        assert!(excerpt.chars().count() <= 23);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt, "word word word word...");
    }

    #[test]
    fn test_never_cuts_mid_word() {
        let excerpt = generate_excerpt("alpha beta gamma delta", 13);
        assert_eq!(excerpt, "alpha beta...");
    }

    #[test]
    fn test_boundary_right_after_window() {
        // The space at index 10 is "at" max_len, so "beta" survives.
        let excerpt = generate_excerpt("alpha beta gamma", 10);
        assert_eq!(excerpt, "alpha beta...");
    }

    #[test]
    fn test_collapses_trailing_whitespace_before_ellipsis() {
        let excerpt = generate_excerpt("one two   three four", 9);
        assert_eq!(excerpt, "one two...");
    }

    #[test]
    fn test_single_long_word() {
        let excerpt = generate_excerpt("supercalifragilistic", 5);
        assert_eq!(excerpt, "...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let content = "日本語 の テキスト です";
        let excerpt = generate_excerpt(content, 6);
        assert_eq!(excerpt, "日本語 の...");
    }
}
