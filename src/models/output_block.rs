//! Output Block Model
//!
//! One rendered block in the session's output log: the intro banner, a
//! command echo with its result lines, or an error line. The log is
//! append-only; only `clear` resets it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of the turn that produced a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlockStatus {
    /// The command completed normally
    #[default]
    Ok,
    /// The command produced a handled error line
    Failed,
}

/// One rendered block in the session output log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputBlock {
    /// Unique identifier for the block
    pub id: String,

    /// The echoed command text; `None` for the intro block
    pub command: Option<String>,

    /// Rendered output lines
    pub lines: Vec<String>,

    /// When the block was produced (in local time)
    pub timestamp: DateTime<Local>,

    /// Whether the turn succeeded or rendered a handled error
    pub status: BlockStatus,
}

impl OutputBlock {
    /// Create a block echoing a command, with no output yet
    pub fn for_command(command: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            command: Some(command.into()),
            lines: Vec::new(),
            timestamp: Local::now(),
            status: BlockStatus::Ok,
        }
    }

    /// Create the intro block shown at session start
    pub fn intro(lines: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            command: None,
            lines,
            timestamp: Local::now(),
            status: BlockStatus::Ok,
        }
    }

    /// Append one output line
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append several output lines
    pub fn push_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    /// Record a handled error line and mark the block failed
    pub fn fail(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.status = BlockStatus::Failed;
    }

    /// True when the turn rendered a handled error
    pub fn is_failed(&self) -> bool {
        matches!(self.status, BlockStatus::Failed)
    }

    /// All lines joined for plain display
    pub fn plain_text(&self) -> String {
        self.lines.join("\n")
    }
}
