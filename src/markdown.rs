//! Markdown rendering
//!
//! Converts the restricted markdown subset used by posts into display
//! markup. This is a deterministic, order-sensitive rewrite pipeline —
//! not a parser — applied to the body text after frontmatter removal:
//!
//! 1. fenced code blocks (language tag ignored, content verbatim)
//! 2. inline code
//! 3. header lines, longest marker first (`###`, `##`, `#`)
//! 4. bold, then italic (so an asterisk pair inside bold markers is not
//!    mis-read as italic, and `***x***` comes out bold-wrapping-italic)
//! 5. links
//! 6. double newlines become paragraph breaks, the rest line breaks
//!
//! Code-span content is stashed before the text passes run and restored
//! afterwards, so backticked text survives untouched.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```[^\n]*\n(.*?)```").expect("fenced code regex"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code regex"));
static HEADER_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### +(.+)$").expect("h3 regex"));
static HEADER_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## +(.+)$").expect("h2 regex"));
static HEADER_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# +(.+)$").expect("h1 regex"));
// bold content is runs of non-asterisks or single-asterisk pairs, so a
// nested italic span stays inside the strong markers
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*((?:[^*\n]|\*[^*\n]+\*)+?)\*\*").expect("bold regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("italic regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link regex"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph break regex"));

/// Stash sentinel; never occurs in post content
const STASH_MARK: char = '\u{1}';

/// Render a post body to display markup
pub fn render(body: &str) -> String {
    let mut stash: Vec<String> = Vec::new();

    // code spans first, stashed so later passes cannot touch them
    let text = FENCED_CODE.replace_all(body.trim(), |caps: &regex::Captures<'_>| {
        stash_markup(&mut stash, format!("<pre><code>{}</code></pre>", &caps[1]))
    });
    let text = INLINE_CODE.replace_all(&text, |caps: &regex::Captures<'_>| {
        stash_markup(&mut stash, format!("<code>{}</code>", &caps[1]))
    });

    let text = HEADER_3.replace_all(&text, "<h3>$1</h3>");
    let text = HEADER_2.replace_all(&text, "<h2>$1</h2>");
    let text = HEADER_1.replace_all(&text, "<h1>$1</h1>");

    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");

    let text = LINK.replace_all(&text, "<a href=\"$2\">$1</a>");

    let text = PARAGRAPH_BREAK.replace_all(&text, "</p>\n<p>");
    let text = text.replace('\n', "<br>\n");
    // paragraph breaks put their own newlines back
    let text = text.replace("</p><br>\n<p>", "</p>\n<p>");

    let mut out = format!("<p>{}</p>", text);
    for (i, markup) in stash.iter().enumerate() {
        out = out.replace(&stash_token(i), markup);
    }
    out
}

fn stash_markup(stash: &mut Vec<String>, markup: String) -> String {
    stash.push(markup);
    stash_token(stash.len() - 1)
}

fn stash_token(i: usize) -> String {
    format!("{}{}{}", STASH_MARK, i, STASH_MARK)
}
