//! Integration Tests for Error Handling
//!
//! Every failure in the session is local and user-visible: it renders
//! one line into the log and the session keeps accepting input. These
//! tests drive the error taxonomy end to end, including an unreachable
//! content store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use termblog::config::Config;
use termblog::content::{ContentStore, StaticStore};
use termblog::error::{Error, Result};
use termblog::models::Entry;
use termblog::session::{TerminalSession, Turn};
use termblog::WorkingDirectory;

/// Store whose every operation fails at the transport level
struct UnreachableStore;

#[async_trait]
impl ContentStore for UnreachableStore {
    async fn list(&self, _dir: WorkingDirectory) -> Result<Vec<Entry>> {
        Err(Error::Unreachable {
            reason: "connection refused".to_string(),
        })
    }

    async fn read(&self, _name: &str) -> Result<String> {
        Err(Error::Unreachable {
            reason: "connection refused".to_string(),
        })
    }
}

/// Store that counts calls, for asserting an operation never ran
#[derive(Default)]
struct CountingStore {
    reads: Arc<AtomicUsize>,
    lists: Arc<AtomicUsize>,
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn list(&self, _dir: WorkingDirectory) -> Result<Vec<Entry>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn read(&self, _name: &str) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(String::new())
    }
}

fn output(turn: Turn) -> String {
    match turn {
        Turn::Output(block) => block.plain_text(),
        other => panic!("expected output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_command_renders_and_continues() {
    let mut session = TerminalSession::new(Box::new(StaticStore::sample()), &Config::default());
    let text = output(session.run_line("vim").await);
    assert_eq!(text, "command not found: vim");

    // the session is still usable
    let text = output(session.run_line("help").await);
    assert!(text.contains("Available commands"));
}

#[tokio::test]
async fn test_cd_to_unknown_directory() {
    let mut session = TerminalSession::new(Box::new(StaticStore::sample()), &Config::default());
    let text = output(session.run_line("cd secrets").await);
    assert_eq!(text, "cd: secrets: No such directory");
    assert_eq!(session.working_dir(), WorkingDirectory::Root);
}

#[tokio::test]
async fn test_cat_no_such_file() {
    let mut session = TerminalSession::new(Box::new(StaticStore::sample()), &Config::default());
    session.run_line("cd posts").await;
    let before = session.working_dir();

    let text = output(session.run_line("cat missing-post").await);
    assert_eq!(text, "cat: missing-post: No such file");
    // working directory is untouched by the failure
    assert_eq!(session.working_dir(), before);
}

#[tokio::test]
async fn test_cat_missing_operand_never_touches_the_store() {
    let store = CountingStore::default();
    let reads = store.reads.clone();
    let lists = store.lists.clone();
    let mut session = TerminalSession::new(Box::new(store), &Config::default());

    let text = output(session.run_line("cat").await);
    assert_eq!(text, "cat: missing file operand");
    assert_eq!(reads.load(Ordering::SeqCst), 0);
    assert_eq!(lists.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ls_against_unreachable_store() {
    let mut session = TerminalSession::new(Box::new(UnreachableStore), &Config::default());
    let text = output(session.run_line("ls").await);
    assert_eq!(text, "ls: cannot access: connection refused");
}

#[tokio::test]
async fn test_cat_against_unreachable_store() {
    let mut session = TerminalSession::new(Box::new(UnreachableStore), &Config::default());
    let text = output(session.run_line("cat hello").await);
    assert_eq!(text, "cat: hello: error reading file: connection refused");
}

#[tokio::test]
async fn test_session_survives_a_run_of_failures() {
    let mut session = TerminalSession::new(Box::new(UnreachableStore), &Config::default());
    session.run_line("ls").await;
    session.run_line("cat x").await;
    session.run_line("cd nowhere").await;
    session.run_line("bogus").await;

    // every failed turn appended its block; navigation still works
    assert_eq!(session.log().len(), 5);
    session.run_line("cd posts").await;
    assert_eq!(session.working_dir(), WorkingDirectory::Posts);
    for block in session.log().iter().skip(1).take(4) {
        assert!(block.is_failed());
    }
}
