//! Pure request -> x-callback-url builders.
//!
//! All validation happens here, so a request that fails to build is never
//! handed to an opener.

use super::client::{CreateNoteRequest, OpenNoteRequest, SearchNotesRequest};
use crate::error::{BearError, Result};

pub const SCHEME: &str = "bear";
pub const ACTION_CREATE: &str = "create";
pub const ACTION_OPEN_NOTE: &str = "open-note";
pub const ACTION_SEARCH: &str = "search";

pub fn create_note_url(request: &CreateNoteRequest) -> Result<String> {
    if request.title.is_empty() {
        return Err(BearError::validation("title is required"));
    }
    if request.text.is_empty() {
        return Err(BearError::validation("text is required"));
    }

    let text = strip_title_heading(&request.title, &request.text);
    let mut query = Query::new();
    query.push("title", &request.title);
    query.push("text", text);

    let tags = join_tags(&request.tags);
    if !tags.is_empty() {
        query.push("tags", &tags);
    }

    Ok(callback_url(ACTION_CREATE, query))
}

/// `title` wins when both identifiers are given; `id` is then ignored.
pub fn open_note_url(request: &OpenNoteRequest) -> Result<String> {
    let mut query = Query::new();
    match (present(&request.title), present(&request.id)) {
        (Some(title), _) => query.push("title", title),
        (None, Some(id)) => query.push("id", id),
        (None, None) => {
            return Err(BearError::validation("either title or id must be provided"));
        }
    }
    Ok(callback_url(ACTION_OPEN_NOTE, query))
}

pub fn search_notes_url(request: &SearchNotesRequest) -> Result<String> {
    if request.term.is_empty() {
        return Err(BearError::validation("term is required"));
    }

    let mut query = Query::new();
    query.push("term", &request.term);
    if let Some(tag) = present(&request.tag) {
        query.push("tag", tag);
    }
    Ok(callback_url(ACTION_SEARCH, query))
}

/// Drops a leading `# <title>` line so Bear does not render the title twice.
///
/// Only the first non-blank line is considered. Whitespace-only lines right
/// after the heading go with it; the first line with content keeps its
/// indentation. If nothing but whitespace would be left, the text is
/// returned untouched.
pub fn strip_title_heading<'a>(title: &str, text: &'a str) -> &'a str {
    let body = text.trim_start();
    let (first_line, rest) = body.split_once('\n').unwrap_or((body, ""));

    let Some(heading) = first_line.strip_prefix('#') else {
        return text;
    };
    if !heading.starts_with([' ', '\t']) || heading.trim() != title {
        return text;
    }

    let mut rest = rest;
    while let Some((line, tail)) = rest.split_once('\n') {
        if !line.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    if rest.trim().is_empty() {
        return text;
    }
    rest
}

/// Trims each tag, drops blank ones and joins the rest with `,`.
///
/// Bear splits the list on commas, so a tag that itself contains `,` ends up
/// as two tags.
fn join_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn callback_url(action: &str, query: Query) -> String {
    format!("{SCHEME}://x-callback-url/{action}?{}", query.finish())
}

/// Ampersand-joined `key=value` pairs, both sides percent-encoded.
struct Query {
    pairs: Vec<String>,
}

impl Query {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push(&mut self, key: &str, value: &str) {
        self.pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }

    fn finish(self) -> String {
        self.pairs.join("&")
    }
}
