//! Working-directory resolution
//!
//! The virtual content tree is one level deep: the root and a single
//! posts directory. The resolver is a pure function of the current
//! location and the `cd` argument; the session owns the persisted
//! [`WorkingDirectory`] value and applies the result.

use crate::error::{Error, Result};

/// The session's current logical location within the virtual content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkingDirectory {
    /// The root of the content tree
    #[default]
    Root,
    /// The posts directory
    Posts,
}

impl WorkingDirectory {
    /// True when the session is inside the posts directory
    pub fn is_posts(&self) -> bool {
        matches!(self, WorkingDirectory::Posts)
    }
}

/// Resolve a `cd` argument against the current working directory
///
/// No argument, `~`, and `..` all land on [`WorkingDirectory::Root`]
/// unconditionally; there is no parent above the root and nothing deeper
/// than the posts directory. `posts` and `_posts` are equivalent spellings
/// of the posts directory. Anything else is a [`Error::NoSuchDirectory`]
/// and leaves the caller's working directory untouched.
pub fn resolve(_current: WorkingDirectory, arg: Option<&str>) -> Result<WorkingDirectory> {
    match arg {
        None | Some("~") | Some("..") => Ok(WorkingDirectory::Root),
        Some("posts") | Some("_posts") => Ok(WorkingDirectory::Posts),
        Some(other) => Err(Error::NoSuchDirectory {
            name: other.to_string(),
        }),
    }
}
