//! Integration Tests for the Post Index Generator
//!
//! Builds real directory trees of HTML posts in a tempdir and checks
//! extraction, categorization, ordering, and the written JSON.

use std::fs;
use std::path::Path;

use termblog::index::{self, PostIndexEntry};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_index_of_a_small_tree() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");

    write(
        &posts.join("first.html"),
        "<h1>First Post</h1><!-- date: 2024-05-01 -->",
    );
    write(
        &posts.join("rust/second.html"),
        "<h1>Second Post</h1><meta name=\"date\" content=\"2024-05-02\">",
    );

    let entries = index::generate(&posts, dir.path()).unwrap();
    assert_eq!(entries.len(), 2);

    // newest first
    assert_eq!(entries[0].title, "Second Post");
    assert_eq!(entries[0].category, "rust");
    assert_eq!(entries[0].file, "rust/second.html");

    assert_eq!(entries[1].title, "First Post");
    assert_eq!(entries[1].category, "General");
    assert_eq!(entries[1].file, "first.html");
}

#[test]
fn test_equal_dates_tie_break_by_title() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");

    write(&posts.join("b.html"), "<h1>Banana</h1><!-- date: 2024-05-01 -->");
    write(&posts.join("a.html"), "<h1>Apple</h1><!-- date: 2024-05-01 -->");
    write(&posts.join("c.html"), "<h1>Cherry</h1><!-- date: 2024-05-02 -->");

    let entries = index::generate(&posts, dir.path()).unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Cherry", "Apple", "Banana"]);
}

#[test]
fn test_title_falls_back_to_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");

    write(&posts.join("untitled-note.html"), "<p>no heading at all</p><!-- date: 2024-01-01 -->");

    let entries = index::generate(&posts, dir.path()).unwrap();
    assert_eq!(entries[0].title, "untitled-note");
}

#[test]
fn test_date_from_file_name_when_content_has_none() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");

    write(&posts.join("2023-11-20-notes.html"), "<h1>Notes</h1>");

    let entries = index::generate(&posts, dir.path()).unwrap();
    assert_eq!(entries[0].date, "2023-11-20");
}

#[test]
fn test_non_html_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");

    write(&posts.join("real.html"), "<h1>Real</h1><!-- date: 2024-01-01 -->");
    write(&posts.join("draft.txt"), "not a post");
    write(&posts.join("style.css"), "body {}");

    let entries = index::generate(&posts, dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Real");
}

#[test]
fn test_missing_posts_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(index::generate(&missing, dir.path()).is_err());
}

#[test]
fn test_written_index_is_json_with_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");
    let output = dir.path().join("posts.json");

    write(&posts.join("one.html"), "<h1>One</h1><!-- date: 2024-02-02 -->");

    let entries = index::generate(&posts, dir.path()).unwrap();
    index::write_index(&entries, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.ends_with('\n'));
    let parsed: Vec<PostIndexEntry> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, entries);
}
