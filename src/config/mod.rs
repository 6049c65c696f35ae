//! Configuration management for termblog
//!
//! Configuration is TOML with three sections: the prompt identity, the
//! remote content listing, and the post-index generator. Every field has
//! a default, and a partial file overrides only what it names.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use loader::ConfigLoader;

/// Main configuration structure for termblog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Prompt identity shown before each input line
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Remote content listing
    #[serde(default)]
    pub content: ContentConfig,

    /// Post-index generator
    #[serde(default)]
    pub index: IndexConfig,
}

/// Prompt identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// User part of the `user@host` prompt
    pub user: String,

    /// Host part of the `user@host` prompt
    pub host: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "blog".to_string(),
        }
    }
}

/// Remote content listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Listing endpoint for the content tree root
    ///
    /// A GET here must return a JSON array of
    /// `{name, type, download_url}` objects.
    pub api_base: String,

    /// Name of the posts directory under the root
    pub posts_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com/repos/termblog/termblog.github.io/contents"
                .to_string(),
            posts_dir: "posts".to_string(),
        }
    }
}

/// Post-index generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory tree to scan for HTML posts
    pub posts_dir: PathBuf,

    /// Where to write the generated index
    pub output: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            output: PathBuf::from("posts.json"),
        }
    }
}
