use crate::bear::{CreateNoteRequest, OpenNoteRequest, SearchNotesRequest};
use crate::mcp::errors;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone)]
pub struct InputError {
    pub kind: &'static str,
    pub message: String,
}

impl InputError {
    fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: errors::INVALID_INPUT,
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for InputError {}

pub fn write_note_request(args: &Value) -> Result<CreateNoteRequest, InputError> {
    let obj = as_object(args)?;
    Ok(CreateNoteRequest {
        title: required_string(obj, "title")?,
        text: required_string(obj, "text")?,
        tags: optional_string_list(obj, "tags")?,
    })
}

pub fn open_note_request(args: &Value) -> Result<OpenNoteRequest, InputError> {
    let obj = as_object(args)?;
    let title = optional_string(obj, "title")?;
    let id = optional_string(obj, "id")?;
    if title.is_none() && id.is_none() {
        return Err(InputError::invalid_input(
            "either title or id must be provided",
        ));
    }
    Ok(OpenNoteRequest { title, id })
}

pub fn search_notes_request(args: &Value) -> Result<SearchNotesRequest, InputError> {
    let obj = as_object(args)?;
    Ok(SearchNotesRequest {
        term: required_string(obj, "term")?,
        tag: optional_string(obj, "tag")?,
    })
}

fn as_object(args: &Value) -> Result<&Map<String, Value>, InputError> {
    args.as_object()
        .ok_or_else(|| InputError::invalid_input("arguments must be an object"))
}

fn required_string(obj: &Map<String, Value>, key: &str) -> Result<String, InputError> {
    match optional_string(obj, key)? {
        Some(value) => Ok(value),
        None => Err(InputError::invalid_input(format!("{key} is required"))),
    }
}

/// Null and empty strings count as absent.
fn optional_string(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, InputError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.is_empty() => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(InputError::invalid_input(format!("{key} must be a string"))),
    }
}

fn optional_string_list(obj: &Map<String, Value>, key: &str) -> Result<Vec<String>, InputError> {
    let Some(value) = obj.get(key) else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }
    let Some(items) = value.as_array() else {
        return Err(InputError::invalid_input(format!(
            "{key} must be an array of strings"
        )));
    };
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                InputError::invalid_input(format!("{key} must be an array of strings"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn write_note_ok() {
        let args = json!({"title": "T", "text": "body", "tags": ["a", "b"]});
        let request = write_note_request(&args).expect("request");
        assert_eq!(request.title, "T");
        assert_eq!(request.text, "body");
        assert_eq!(request.tags, vec!["a", "b"]);
    }

    #[test]
    fn write_note_tags_optional() {
        let args = json!({"title": "T", "text": "body"});
        let request = write_note_request(&args).expect("request");
        assert!(request.tags.is_empty());
    }

    #[test]
    fn write_note_missing_text() {
        let args = json!({"title": "T"});
        let err = write_note_request(&args).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
        assert_eq!(err.message, "text is required");
    }

    #[test]
    fn write_note_empty_title() {
        let args = json!({"title": "", "text": "body"});
        let err = write_note_request(&args).expect_err("error");
        assert_eq!(err.message, "title is required");
    }

    #[test]
    fn write_note_bad_tags() {
        let args = json!({"title": "T", "text": "body", "tags": "a,b"});
        let err = write_note_request(&args).expect_err("error");
        assert_eq!(err.message, "tags must be an array of strings");

        let args = json!({"title": "T", "text": "body", "tags": ["a", 1]});
        assert!(write_note_request(&args).is_err());
    }

    #[test]
    fn non_string_title() {
        let args = json!({"title": 5, "text": "body"});
        let err = write_note_request(&args).expect_err("error");
        assert_eq!(err.message, "title must be a string");
    }

    #[test]
    fn arguments_must_be_object() {
        let err = search_notes_request(&json!(["foo"])).expect_err("error");
        assert_eq!(err.message, "arguments must be an object");
    }

    #[test]
    fn open_note_needs_identifier() {
        let err = open_note_request(&json!({})).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);

        let err = open_note_request(&json!({"title": "", "id": null})).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn open_note_keeps_both() {
        let request = open_note_request(&json!({"title": "T", "id": "X"})).expect("request");
        assert_eq!(request.title.as_deref(), Some("T"));
        assert_eq!(request.id.as_deref(), Some("X"));
    }

    #[test]
    fn search_tag_optional() {
        let request = search_notes_request(&json!({"term": "foo"})).expect("request");
        assert_eq!(request.term, "foo");
        assert_eq!(request.tag, None);

        let err = search_notes_request(&json!({"tag": "bar"})).expect_err("error");
        assert_eq!(err.message, "term is required");
    }
}
