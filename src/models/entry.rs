//! Directory Entry Model
//!
//! One listed item returned by a content-store directory listing,
//! together with the presentation transforms applied before rendering.
//! Entries are ephemeral: recreated per `ls`, never cached across calls.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading `YYYY-MM-DD-` date prefix on post file names
static DATE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-").expect("date prefix regex"));

/// Kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A regular file
    File,
    /// A directory
    Directory,
}

/// One listed item (file or directory) returned by a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Raw name as reported by the store
    pub name: String,

    /// File or directory
    pub kind: EntryKind,
}

impl Entry {
    /// Create a file entry
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    /// True for directory entries
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Name as shown by `ls`
    ///
    /// Directories gain a trailing `/`. Inside the posts directory, file
    /// names are reduced to their human title: the `YYYY-MM-DD-` date
    /// prefix and the extension are stripped. Files elsewhere keep their
    /// raw name.
    pub fn display_name(&self, in_posts: bool) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File if in_posts => post_title(&self.name),
            EntryKind::File => self.name.clone(),
        }
    }
}

/// Reduce a post file name to its human title
///
/// Strips a leading `YYYY-MM-DD-` date prefix when present, then the
/// final extension when present. `2024-01-02-hello-world.md` becomes
/// `hello-world`; a name without either marker passes through unchanged.
pub fn post_title(raw: &str) -> String {
    let without_date = DATE_PREFIX.replace(raw, "");
    let name: &str = &without_date;
    match name.rfind('.') {
        Some(dot) if dot > 0 => name[..dot].to_string(),
        _ => name.to_string(),
    }
}
