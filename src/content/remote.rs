//! Remote content store
//!
//! Backs the virtual filesystem with an HTTP directory-listing service:
//! a GET against a listing endpoint returns a JSON array of entries, and
//! a GET against an entry's download URL returns the raw file text.
//! Non-success statuses and malformed payloads surface uniformly as
//! `Unreachable`; there is no retry and no timeout beyond the
//! transport's own.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Entry, EntryKind};
use crate::resolver::WorkingDirectory;

use super::{matches_request, ContentStore};

/// One item in the listing service's JSON response
#[derive(Debug, Deserialize)]
struct ListingItem {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

impl ListingItem {
    fn is_file(&self) -> bool {
        self.kind == "file"
    }

    fn to_entry(&self) -> Entry {
        Entry {
            name: self.name.clone(),
            kind: if self.is_file() {
                EntryKind::File
            } else {
                EntryKind::Directory
            },
        }
    }
}

/// Content store backed by a remote directory-listing service
pub struct RemoteStore {
    client: reqwest::Client,
    /// Listing endpoint for the tree root, without a trailing slash
    api_base: String,
    /// Name of the posts directory under the root
    posts_dir: String,
}

impl RemoteStore {
    /// Create a store against a listing endpoint
    pub fn new(api_base: impl Into<String>, posts_dir: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            posts_dir: posts_dir.into(),
        })
    }

    fn listing_url(&self, dir: WorkingDirectory) -> String {
        match dir {
            WorkingDirectory::Root => self.api_base.clone(),
            WorkingDirectory::Posts => format!("{}/{}", self.api_base, self.posts_dir),
        }
    }

    async fn fetch_listing(&self, url: &str) -> Result<Vec<ListingItem>> {
        debug!("fetching listing from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Unreachable {
                reason: format!("listing request returned {}", status),
            });
        }
        // a decode failure is a malformed listing, not a missing file;
        // a well-formed payload that is not an array lists as nothing
        let value = response.json::<serde_json::Value>().await?;
        parse_listing(value)
    }

    async fn fetch_file(&self, url: &str) -> Result<String> {
        debug!("fetching file from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Unreachable {
                reason: format!("content request returned {}", status),
            });
        }
        Ok(response.text().await?)
    }
}

fn parse_listing(value: serde_json::Value) -> Result<Vec<ListingItem>> {
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| Error::Unreachable {
        reason: e.to_string(),
    })
}

#[async_trait]
impl ContentStore for RemoteStore {
    async fn list(&self, dir: WorkingDirectory) -> Result<Vec<Entry>> {
        let items = self.fetch_listing(&self.listing_url(dir)).await?;
        Ok(items.iter().map(ListingItem::to_entry).collect())
    }

    async fn read(&self, name: &str) -> Result<String> {
        // phase one: enumerate the posts directory
        let items = self
            .fetch_listing(&self.listing_url(WorkingDirectory::Posts))
            .await?;

        // phase two: locate the entry and fetch its content
        let matched = items
            .iter()
            .find(|item| matches_request(&item.name, name))
            .ok_or_else(|| Error::NoSuchFile {
                name: name.to_string(),
            })?;

        let url = matched
            .download_url
            .as_deref()
            .filter(|_| matched.is_file())
            .ok_or_else(|| Error::NoSuchFile {
                name: name.to_string(),
            })?;

        self.fetch_file(url).await
    }
}
