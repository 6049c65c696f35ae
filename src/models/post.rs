//! Post Document Model
//!
//! A fetched post split into its optional frontmatter metadata and body.
//! Documents are transient: produced fresh per `cat`, never stored.

use once_cell::sync::Lazy;
use regex::Regex;

/// `title:` line inside a frontmatter block, quotes optional
static TITLE_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^title:\s*"?([^"\n]*)"?\s*$"#).expect("title field regex"));

/// `date:` line inside a frontmatter block; only `YYYY-MM-DD` counts
static DATE_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^date:\s*(\d{4}-\d{2}-\d{2})\s*$").expect("date field regex"));

/// A post split into optional metadata and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDocument {
    /// Title from frontmatter, if present
    pub title: Option<String>,

    /// Publication date from frontmatter (`YYYY-MM-DD`), if present
    pub date: Option<String>,

    /// Everything after the frontmatter block, untouched
    pub body: String,
}

impl PostDocument {
    /// Split raw file content on its frontmatter delimiters
    ///
    /// A delimiter is a line that is exactly `---`. The opening delimiter
    /// must be the first non-empty line; the block runs to the next one.
    /// Fewer than two delimiters means the whole content is body and both
    /// metadata fields stay empty — that is not an error.
    pub fn parse(raw: &str) -> Self {
        if let Some((meta, body)) = split_frontmatter(raw) {
            Self {
                title: TITLE_FIELD
                    .captures(meta)
                    .map(|c| c[1].trim().to_string())
                    .filter(|t| !t.is_empty()),
                date: DATE_FIELD.captures(meta).map(|c| c[1].to_string()),
                body: body.to_string(),
            }
        } else {
            Self {
                title: None,
                date: None,
                body: raw.to_string(),
            }
        }
    }
}

/// Locate the frontmatter block, returning `(metadata, body)` on success
fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    let mut lines = raw.lines();

    // skip leading blank lines; the opener must be the first real line
    let opener = loop {
        let line = lines.next()?;
        if !line.trim().is_empty() {
            break line;
        }
        offset += line.len() + 1;
    };
    if opener.trim_end() != "---" {
        return None;
    }

    let meta_start = offset + opener.len() + 1;
    if meta_start > raw.len() {
        return None;
    }
    let rest = &raw[meta_start..];
    for (pos, line) in line_spans(rest) {
        if line.trim_end() == "---" {
            let meta = &rest[..pos];
            let body_start = pos + line.len();
            let body = rest[body_start..].strip_prefix('\n').unwrap_or(&rest[body_start..]);
            return Some((meta, body));
        }
    }
    None
}

/// Iterate lines together with their byte offset into `s`
fn line_spans(s: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let mut pos = 0;
    s.split_inclusive('\n').map(move |chunk| {
        let start = pos;
        pos += chunk.len();
        (start, chunk.trim_end_matches('\n'))
    })
}
