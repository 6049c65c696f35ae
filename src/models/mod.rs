//! Core data models for termblog
//!
//! This module contains the domain entities: directory entries as
//! returned by content listings, parsed post documents, and the output
//! blocks that make up the session log.

pub mod entry;
pub mod output_block;
pub mod post;

// Re-exports for convenience
pub use entry::{post_title, Entry, EntryKind};
pub use output_block::{BlockStatus, OutputBlock};
pub use post::PostDocument;
