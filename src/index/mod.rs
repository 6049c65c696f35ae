//! Post index generation
//!
//! The offline batch side of the blog: scan a directory tree of HTML
//! posts and emit a JSON index of `{title, date, category, file}`
//! entries sorted by recency. Title comes from the first `<h1>`; the
//! date is checked against several sources in a fixed order, ending at
//! today's date; the category is the post's top-level subdirectory.
//!
//! A failed scan is fatal to the generator. A failed version-control
//! date lookup for one file is not — it is logged and the next date
//! source takes over.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("h1 regex"));
static INNER_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("inner tag regex"));
static META_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+name=["']date["']\s+content=["'](\d{4}-\d{2}-\d{2})["']"#)
        .expect("meta date regex")
});
static TIME_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<time[^>]*datetime=["'](\d{4}-\d{2}-\d{2})["']"#).expect("time date regex")
});
static COMMENT_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<!--\s*date:\s*(\d{4}-\d{2}-\d{2})\s*-->").expect("comment date regex")
});
static NAME_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("name date regex"));

/// One entry in the generated post index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIndexEntry {
    /// Post title
    pub title: String,

    /// Publication date, `YYYY-MM-DD`
    pub date: String,

    /// Top-level subdirectory under the posts root, or `General`
    pub category: String,

    /// Path relative to the posts root, forward slashes
    pub file: String,
}

/// Scan a posts tree and build the sorted index
///
/// `repo_root` anchors the version-control date lookup; it is usually
/// the repository the posts directory lives in.
pub fn generate(posts_dir: &Path, repo_root: &Path) -> Result<Vec<PostIndexEntry>> {
    let mut files = Vec::new();
    collect_html_files(posts_dir, &mut files).map_err(|e| Error::ScanFailed {
        path: posts_dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!("indexing {} post file(s) under {}", files.len(), posts_dir.display());

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path)?;
        let relative = path
            .strip_prefix(posts_dir)
            .unwrap_or(&path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let category = match relative.split_once('/') {
            Some((top, _)) => top.to_string(),
            None => "General".to_string(),
        };
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        entries.push(PostIndexEntry {
            title: extract_title(&content, &stem),
            date: extract_date(&content, &file_name, &path, repo_root),
            category,
            file: relative,
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Write the index as pretty-printed JSON with a trailing newline
pub fn write_index(entries: &[PostIndexEntry], output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(output, format!("{}\n", json))?;
    info!("wrote {} entries to {}", entries.len(), output.display());
    Ok(())
}

/// Sort by date descending, then title ascending
pub fn sort_entries(entries: &mut [PostIndexEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
}

fn collect_html_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_html_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "html") {
            out.push(path);
        }
    }
    Ok(())
}

/// First `<h1>` inner text, stripped of nested markup, else the fallback
fn extract_title(content: &str, fallback: &str) -> String {
    let Some(caps) = H1.captures(content) else {
        return fallback.to_string();
    };
    let inner = INNER_TAG.replace_all(&caps[1], "");
    let title = inner.trim();
    if title.is_empty() {
        fallback.to_string()
    } else {
        title.to_string()
    }
}

/// Resolve the post date from its sources, in priority order
///
/// Content markers first (`<meta name="date">`, `<time datetime>`, a
/// `<!-- date: ... -->` comment), then a date-shaped substring of the
/// file name, then the file's last commit date, then today.
fn extract_date(content: &str, file_name: &str, path: &Path, repo_root: &Path) -> String {
    for pattern in [&META_DATE, &TIME_DATE, &COMMENT_DATE] {
        if let Some(caps) = pattern.captures(content) {
            return caps[1].to_string();
        }
    }

    if let Some(m) = NAME_DATE.find(file_name) {
        return m.as_str().to_string();
    }

    match git_last_commit_date(repo_root, path) {
        Ok(Some(date)) => return date,
        Ok(None) => {}
        Err(err) => {
            warn!("failed to read git date for {}: {}", path.display(), err);
        }
    }

    Local::now().format("%Y-%m-%d").to_string()
}

/// Date of the newest commit that changed the file, if any
fn git_last_commit_date(repo_root: &Path, file: &Path) -> Result<Option<String>> {
    let repo = match git2::Repository::discover(repo_root) {
        Ok(repo) => repo,
        // not a repository is an expected layout, not a failure
        Err(err) if err.code() == git2::ErrorCode::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let Some(workdir) = repo.workdir().map(Path::to_path_buf) else {
        return Ok(None);
    };
    let canonical = file.canonicalize()?;
    let Ok(relative) = canonical.strip_prefix(&workdir) else {
        return Ok(None);
    };

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(git2::Sort::TIME)?;

    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        let blob = commit.tree()?.get_path(relative).ok().map(|e| e.id());

        let touched = if commit.parent_count() == 0 {
            blob.is_some()
        } else {
            let parent_blob = commit
                .parent(0)?
                .tree()?
                .get_path(relative)
                .ok()
                .map(|e| e.id());
            blob != parent_blob
        };

        if touched {
            let seconds = commit.time().seconds();
            let date = chrono::DateTime::from_timestamp(seconds, 0)
                .map(|dt| dt.format("%Y-%m-%d").to_string());
            return Ok(date);
        }
    }
    Ok(None)
}
