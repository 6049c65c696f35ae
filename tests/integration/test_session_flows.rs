//! Integration Tests for Session Command Flows
//!
//! End-to-end runs of the terminal session over a static content store:
//! listing, navigation, post rendering, and log lifecycle.

use termblog::config::Config;
use termblog::content::StaticStore;
use termblog::models::Entry;
use termblog::session::{TerminalSession, Turn};
use termblog::WorkingDirectory;

fn sample_session() -> TerminalSession {
    let store = StaticStore::new()
        .with_root_entry(Entry::dir("posts"))
        .with_root_entry(Entry::file("index.html"))
        .with_post(
            "2024-01-02-hello-world.md",
            "---\ntitle: \"Hi\"\ndate: 2024-01-02\n---\nBody **bold** and *em*",
        )
        .with_post("2024-02-10-second-post.md", "No frontmatter, just text.")
        .with_posts_dir("drafts");
    TerminalSession::new(Box::new(store), &Config::default())
}

fn output(turn: Turn) -> String {
    match turn {
        Turn::Output(block) => block.plain_text(),
        other => panic!("expected output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ls_at_root_marks_directories() {
    let mut session = sample_session();
    let text = output(session.run_line("ls").await);
    assert!(text.contains("posts/"));
    // root files keep their raw names
    assert!(text.contains("index.html"));
}

#[tokio::test]
async fn test_ls_in_posts_strips_dates_and_extensions() {
    let mut session = sample_session();
    session.run_line("cd posts").await;
    let text = output(session.run_line("ls").await);
    assert!(text.contains("hello-world"));
    assert!(text.contains("second-post"));
    assert!(text.contains("drafts/"));
    assert!(!text.contains("2024-01-02"));
    assert!(!text.contains(".md"));
}

#[tokio::test]
async fn test_ls_empty_directory_renders_empty_marker() {
    let store = StaticStore::new();
    let mut session = TerminalSession::new(Box::new(store), &Config::default());
    let text = output(session.run_line("ls").await);
    assert_eq!(text, "(empty)");
}

#[tokio::test]
async fn test_cd_underscore_posts_is_equivalent() {
    let mut session = sample_session();
    session.run_line("cd _posts").await;
    assert_eq!(session.working_dir(), WorkingDirectory::Posts);
}

#[tokio::test]
async fn test_cat_renders_frontmatter_and_markdown() {
    let mut session = sample_session();
    let text = output(session.run_line("cat hello-world").await);
    assert!(text.contains("<h1>Hi</h1>"));
    assert!(text.contains("2024-01-02"));
    assert!(text.contains("<strong>bold</strong>"));
    assert!(text.contains("<em>em</em>"));
}

#[tokio::test]
async fn test_cat_works_from_any_working_directory() {
    let mut session = sample_session();
    // cat always resolves against the posts directory
    let from_root = output(session.run_line("cat second-post").await);
    session.run_line("cd posts").await;
    let from_posts = output(session.run_line("cat second-post").await);
    assert!(from_root.contains("just text"));
    assert!(from_posts.contains("just text"));
}

#[tokio::test]
async fn test_cat_substring_match_hits_first_listed_entry() {
    let mut session = sample_session();
    // "post" is a substring of the second file's raw name only
    let text = output(session.run_line("cat post").await);
    assert!(text.contains("just text"));
}

#[tokio::test]
async fn test_help_lists_the_command_set() {
    let mut session = sample_session();
    let text = output(session.run_line("help").await);
    for name in ["help", "clear", "ls", "cd", "cat"] {
        assert!(text.contains(name), "help should mention {}", name);
    }
}

#[tokio::test]
async fn test_clear_resets_log_and_session_continues() {
    let mut session = sample_session();
    session.run_line("ls").await;
    session.run_line("help").await;
    assert!(session.log().len() > 2);

    let turn = session.run_line("clear").await;
    assert!(matches!(turn, Turn::Cleared));
    assert!(session.log().is_empty());

    // next turn appends exactly one block
    session.run_line("ls").await;
    assert_eq!(session.log().len(), 1);
}

#[tokio::test]
async fn test_command_echo_is_recorded_in_the_log() {
    let mut session = sample_session();
    session.run_line("  ls  ").await;
    let block = session.log().last().unwrap();
    assert_eq!(block.command.as_deref(), Some("ls"));
}

#[tokio::test]
async fn test_full_reading_session() {
    let mut session = sample_session();
    session.run_line("help").await;
    session.run_line("cd posts").await;
    session.run_line("ls").await;
    let text = output(session.run_line("cat hello-world").await);
    assert!(text.contains("<strong>bold</strong>"));
    session.run_line("cd ~").await;
    assert_eq!(session.working_dir(), WorkingDirectory::Root);
    // intro + five command blocks
    assert_eq!(session.log().len(), 6);
}
