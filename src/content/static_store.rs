//! Static content store
//!
//! The earliest variant of the shell served everything from a constant
//! table instead of a remote listing. That behavior survives here as the
//! in-memory store: it backs offline runs and stands in for the remote
//! service in tests, going through the same trait and the same two-phase
//! read lookup.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::Entry;
use crate::resolver::WorkingDirectory;

use super::{matches_request, ContentStore};

/// Content store serving a fixed in-memory tree
#[derive(Debug, Default)]
pub struct StaticStore {
    root: Vec<Entry>,
    posts: Vec<Entry>,
    contents: HashMap<String, String>,
}

impl StaticStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the root listing
    pub fn with_root_entry(mut self, entry: Entry) -> Self {
        self.root.push(entry);
        self
    }

    /// Add a post file with its raw content
    pub fn with_post(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        self.posts.push(Entry::file(name.clone()));
        self.contents.insert(name, content.into());
        self
    }

    /// Add a subdirectory entry to the posts listing
    pub fn with_posts_dir(mut self, name: impl Into<String>) -> Self {
        self.posts.push(Entry::dir(name));
        self
    }

    /// Built-in demo content used by offline runs
    pub fn sample() -> Self {
        Self::new()
            .with_root_entry(Entry::dir("posts"))
            .with_root_entry(Entry::file("index.html"))
            .with_root_entry(Entry::file("README.md"))
            .with_post(
                "2024-01-02-hello-world.md",
                "---\ntitle: \"Hello, World\"\ndate: 2024-01-02\n---\n\
                 Welcome to my **terminal** blog.\n\n\
                 This is where I post my thoughts, ideas, and code experiments.\n\n\
                 Stay tuned!\n",
            )
            .with_post(
                "2024-03-15-reading-offline.md",
                "---\ntitle: \"Reading Offline\"\ndate: 2024-03-15\n---\n\
                 Running with `--offline` serves posts from a built-in table\n\
                 instead of the remote listing. *Everything* else works the same.\n",
            )
    }
}

#[async_trait]
impl ContentStore for StaticStore {
    async fn list(&self, dir: WorkingDirectory) -> Result<Vec<Entry>> {
        Ok(match dir {
            WorkingDirectory::Root => self.root.clone(),
            WorkingDirectory::Posts => self.posts.clone(),
        })
    }

    async fn read(&self, name: &str) -> Result<String> {
        let matched = self
            .posts
            .iter()
            .find(|entry| matches_request(&entry.name, name))
            .ok_or_else(|| Error::NoSuchFile {
                name: name.to_string(),
            })?;

        // directories list but have nothing to read
        self.contents
            .get(&matched.name)
            .cloned()
            .ok_or_else(|| Error::NoSuchFile {
                name: name.to_string(),
            })
    }
}
