//! Integration tests for writing, editing, publishing and deleting posts

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{create_post, darkwrite_cmd, init_workspace, store_path};

fn stored_posts(root: &std::path::Path) -> serde_json::Value {
    let raw = fs::read_to_string(store_path(root)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_new_creates_draft() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let id = create_post(
        temp.path(),
        &[
            "--title",
            "Hello world",
            "--content",
            "<p>First <em>post</em>.</p>",
            "--tag",
            "intro",
            "--tag",
            "intro",
            "--cover",
            "https://example.com/cover.jpg",
        ],
    );

    let posts = stored_posts(temp.path());
    let post = &posts[0];
    assert_eq!(post["id"], id.as_str());
    assert_eq!(post["title"], "Hello world");
    assert_eq!(post["excerpt"], "First post.");
    assert_eq!(post["tags"], serde_json::json!(["intro"]));
    assert_eq!(post["coverImage"], "https://example.com/cover.jpg");
    assert_eq!(post["published"], false);
    assert_eq!(post["createdAt"], post["updatedAt"]);
}

#[test]
fn test_new_reads_content_from_file() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let body = temp.path().join("body.html");
    fs::write(&body, "<h1>From a file</h1>").unwrap();

    let id = create_post(
        temp.path(),
        &["--title", "File", "--file", body.to_str().unwrap()],
    );

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>From a file</h1>"));
}

#[test]
fn test_new_with_publish() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    create_post(
        temp.path(),
        &["--title", "Live", "--content", "body", "--publish"],
    );

    assert_eq!(stored_posts(temp.path())[0]["published"], true);
}

#[test]
fn test_new_rejects_blank_title() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "  ", "--content", "body"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please add a title to your post"));

    assert!(!store_path(temp.path()).exists());
}

#[test]
fn test_new_requires_content() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "No body"])
        .assert()
        .failure();
}

#[test]
fn test_new_uses_configured_excerpt_length() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["config", "excerpt_length", "20"])
        .assert()
        .success();

    let content = format!("<p>{}</p>", "word ".repeat(40));
    create_post(temp.path(), &["--title", "Words", "--content", &content]);

    assert_eq!(
        stored_posts(temp.path())[0]["excerpt"],
        "word word word word..."
    );
}

#[test]
fn test_show_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let id = create_post(
        temp.path(),
        &["--title", "Shown", "--content", "Body text", "--tag", "misc"],
    );

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shown"))
        .stdout(predicate::str::contains("status:    draft"))
        .stdout(predicate::str::contains("tags:      misc"))
        .stdout(predicate::str::contains("Body text"));
}

#[test]
fn test_show_missing_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["show", "doesnotexist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Post not found: 'doesnotexist'"))
        .stderr(predicate::str::contains("Warning").not());
}

#[test]
fn test_show_on_corrupt_store_warns() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let id = create_post(temp.path(), &["--title", "Kept", "--content", "Body"]);
    fs::write(store_path(temp.path()), "{not json").unwrap();

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Warning: Failed to load posts"));

    assert_eq!(
        fs::read_to_string(store_path(temp.path())).unwrap(),
        "{not json"
    );
}

#[test]
fn test_edit_title_keeps_identity() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let id = create_post(temp.path(), &["--title", "Old", "--content", "Body"]);
    let before = stored_posts(temp.path())[0].clone();

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--title", "New"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated post {}", id)));

    let after = stored_posts(temp.path())[0].clone();
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["title"], "New");
    assert_eq!(after["createdAt"], before["createdAt"]);
    assert_ne!(after["updatedAt"], before["updatedAt"]);
    assert_eq!(after["excerpt"], before["excerpt"]);
}

#[test]
fn test_edit_content_regenerates_excerpt() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let id = create_post(temp.path(), &["--title", "T", "--content", "Old body"]);

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--content", "<b>New</b> body"])
        .assert()
        .success();

    assert_eq!(stored_posts(temp.path())[0]["excerpt"], "New body");
}

#[test]
fn test_edit_tags_and_cover() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let id = create_post(
        temp.path(),
        &["--title", "T", "--content", "c", "--tag", "a", "--cover", "x.jpg"],
    );

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--tag", "b", "--tag", "c", "--no-cover"])
        .assert()
        .success();

    let post = stored_posts(temp.path())[0].clone();
    assert_eq!(post["tags"], serde_json::json!(["b", "c"]));
    assert!(post.get("coverImage").is_none());

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--clear-tags"])
        .assert()
        .success();

    assert_eq!(stored_posts(temp.path())[0]["tags"], serde_json::json!([]));
}

#[test]
fn test_edit_missing_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["edit", "ghost", "--title", "x"])
        .assert()
        .code(4);
}

#[test]
fn test_publish_toggles() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let id = create_post(temp.path(), &["--title", "T", "--content", "c"]);

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["publish", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Published post {}", id)));
    assert_eq!(stored_posts(temp.path())[0]["published"], true);

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["publish", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Unpublished post {}", id)));
    assert_eq!(stored_posts(temp.path())[0]["published"], false);
}

#[test]
fn test_delete_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let keep = create_post(temp.path(), &["--title", "Keep", "--content", "c"]);
    let gone = create_post(temp.path(), &["--title", "Gone", "--content", "c"]);

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["delete", &gone])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted post {}", gone)));

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["show", &gone])
        .assert()
        .code(4);

    let posts = stored_posts(temp.path());
    assert_eq!(posts.as_array().unwrap().len(), 1);
    assert_eq!(posts[0]["id"], keep.as_str());
}

#[test]
fn test_delete_missing_post() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["delete", "ghost"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Post not found"));
}

#[test]
fn test_write_refused_on_corrupt_store() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    fs::write(store_path(temp.path()), "not json at all").unwrap();

    darkwrite_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "T", "--content", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load posts"));

    assert_eq!(
        fs::read_to_string(store_path(temp.path())).unwrap(),
        "not json at all"
    );
}
