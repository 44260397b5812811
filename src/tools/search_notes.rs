use crate::bear::{NoteClient, Opener};
use crate::input::search_notes_request;
use crate::mcp::contracts::TOOL_SEARCH_NOTES;
use crate::tools::{client_error_result, error_result, success_result};
use serde_json::Value;

pub fn call<O: Opener>(client: &NoteClient<O>, args: &Value) -> Value {
    let request = match search_notes_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let mut summary = format!("Search executed in Bear for: {}", request.term);
    if let Some(tag) = &request.tag {
        summary.push_str(&format!(" with tag: {tag}"));
    }

    match client.search_notes(&request) {
        Ok(outcome) => success_result(summary, &outcome),
        Err(err) => client_error_result(&err, TOOL_SEARCH_NOTES),
    }
}
