//! Terminal Session
//!
//! The top-level driver: owns the output log and the working directory,
//! and runs one input line per turn through the interpreter and on to
//! the resolver, the content store, and the renderer. A turn always runs
//! to completion — success, handled error, or unknown command — and the
//! caller reopens the prompt afterwards, so no command sequence can
//! leave the session without an active prompt.

use crate::commands::{self, Effect};
use crate::config::Config;
use crate::content::ContentStore;
use crate::error::Error;
use crate::markdown;
use crate::models::{OutputBlock, PostDocument};
use crate::resolver::{self, WorkingDirectory};

/// What a completed turn did to the log
#[derive(Debug, Clone)]
pub enum Turn {
    /// Empty input; nothing was appended
    Quiet,
    /// `clear` ran; the log was reset and nothing appended
    Cleared,
    /// A block was appended to the log
    Output(OutputBlock),
}

/// A running terminal session
pub struct TerminalSession {
    store: Box<dyn ContentStore>,
    user: String,
    host: String,
    posts_dir: String,
    working_dir: WorkingDirectory,
    log: Vec<OutputBlock>,
}

impl TerminalSession {
    /// Create a session over a content store
    ///
    /// The log starts cleared with the intro block appended, per the
    /// session lifecycle: created at session start, destroyed at end.
    pub fn new(store: Box<dyn ContentStore>, config: &Config) -> Self {
        let mut session = Self {
            store,
            user: config.prompt.user.clone(),
            host: config.prompt.host.clone(),
            posts_dir: config.content.posts_dir.clone(),
            working_dir: WorkingDirectory::Root,
            log: Vec::new(),
        };
        session.log.push(OutputBlock::intro(intro_lines()));
        session
    }

    /// The prompt string for the next input line
    pub fn prompt_line(&self) -> String {
        let path = match self.working_dir {
            WorkingDirectory::Root => "~".to_string(),
            WorkingDirectory::Posts => format!("~/{}", self.posts_dir),
        };
        format!("{}@{}:{}$ ", self.user, self.host, path)
    }

    /// The session's current working directory
    pub fn working_dir(&self) -> WorkingDirectory {
        self.working_dir
    }

    /// The output log, oldest block first
    pub fn log(&self) -> &[OutputBlock] {
        &self.log
    }

    /// Run one input line to completion
    ///
    /// Any content fetch suspends only this turn; the session processes
    /// no other input meanwhile. Every path appends at most one block
    /// and returns, so the caller can always reopen the prompt.
    pub async fn run_line(&mut self, line: &str) -> Turn {
        let effect = commands::interpret(line);
        debug!(?effect, "dispatching");

        let block = match effect {
            Effect::Noop => return Turn::Quiet,
            Effect::Clear => {
                self.log.clear();
                return Turn::Cleared;
            }
            Effect::Help => {
                let mut block = OutputBlock::for_command(line.trim());
                block.push_lines(help_lines());
                block
            }
            Effect::List => self.run_list(line).await,
            Effect::ChangeDirectory(arg) => self.run_cd(line, arg.as_deref()),
            Effect::ReadFile(arg) => self.run_cat(line, arg.as_deref()).await,
            Effect::Unknown(name) => {
                let mut block = OutputBlock::for_command(line.trim());
                block.fail(format!("command not found: {}", name));
                block
            }
        };

        self.log.push(block.clone());
        Turn::Output(block)
    }

    async fn run_list(&mut self, line: &str) -> OutputBlock {
        let mut block = OutputBlock::for_command(line.trim());
        match self.store.list(self.working_dir).await {
            Ok(entries) if entries.is_empty() => {
                block.push_line("(empty)");
            }
            Ok(entries) => {
                let in_posts = self.working_dir.is_posts();
                block.push_lines(entries.iter().map(|e| e.display_name(in_posts)));
            }
            Err(err) => {
                warn!("listing failed: {}", err);
                block.fail(format!("ls: cannot access: {}", err));
            }
        }
        block
    }

    fn run_cd(&mut self, line: &str, arg: Option<&str>) -> OutputBlock {
        let mut block = OutputBlock::for_command(line.trim());
        match resolver::resolve(self.working_dir, arg) {
            Ok(dir) => {
                self.working_dir = dir;
            }
            Err(err) => {
                block.fail(format!("cd: {}", err));
            }
        }
        block
    }

    async fn run_cat(&mut self, line: &str, arg: Option<&str>) -> OutputBlock {
        let mut block = OutputBlock::for_command(line.trim());
        let Some(name) = arg else {
            // local error; the store is never consulted
            block.fail(Error::MissingArgument {
                command: "cat".to_string(),
                operand: "file".to_string(),
            }
            .to_string());
            return block;
        };

        match self.store.read(name).await {
            Ok(raw) => {
                let doc = PostDocument::parse(&raw);
                if let Some(title) = &doc.title {
                    block.push_line(format!("<h1>{}</h1>", title));
                }
                if let Some(date) = &doc.date {
                    block.push_line(date.clone());
                }
                block.push_line(markdown::render(&doc.body));
            }
            Err(err) if err.is_not_found() => {
                block.fail(format!("cat: {}", err));
            }
            Err(err) => {
                warn!("content fetch failed: {}", err);
                block.fail(format!("cat: {}: error reading file: {}", name, err));
            }
        }
        block
    }
}

fn intro_lines() -> Vec<String> {
    vec![
        "Welcome to the terminal blog.".to_string(),
        "Type `help` to get started!".to_string(),
    ]
}

fn help_lines() -> Vec<String> {
    vec![
        "Available commands:".to_string(),
        " - help".to_string(),
        " - clear".to_string(),
        " - ls".to_string(),
        " - cd <dir>".to_string(),
        " - cat <name>".to_string(),
    ]
}
