//! Content store abstraction
//!
//! The virtual filesystem behind the shell is a read-only content tree
//! reached through the [`ContentStore`] trait: list the entries under a
//! location, or read one post's full text. The remote implementation
//! talks to a directory-listing service; the static one serves an
//! in-memory table and doubles as the offline backing and test double.

pub mod remote;
pub mod static_store;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{post_title, Entry};
use crate::resolver::WorkingDirectory;

pub use remote::RemoteStore;
pub use static_store::StaticStore;

/// A hierarchical read-only content tree
///
/// Listing and reading are decoupled: the backing store only exposes
/// directory enumeration, not direct name-based addressing, so `read`
/// is a two-phase lookup (list the posts directory, locate the entry,
/// fetch its content). Either phase can fail with
/// [`Error::Unreachable`](crate::error::Error::Unreachable); a name
/// that matches nothing is
/// [`Error::NoSuchFile`](crate::error::Error::NoSuchFile).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// List the entries under a working directory
    async fn list(&self, dir: WorkingDirectory) -> Result<Vec<Entry>>;

    /// Locate a post by identifier and fetch its full content
    async fn read(&self, name: &str) -> Result<String>;
}

/// Whether a listed raw name satisfies a `cat` request
///
/// A raw name matches when it contains the requested identifier as a
/// substring, or when its date-stripped, extension-stripped title equals
/// the identifier exactly. The substring fallback can hit unintended
/// files when identifiers overlap; that looseness is intentional and the
/// first match in listing order wins.
pub fn matches_request(raw_name: &str, requested: &str) -> bool {
    raw_name.contains(requested) || post_title(raw_name) == requested
}
