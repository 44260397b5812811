use crate::bear::{NoteClient, OpenNoteRequest, Opener};
use crate::input::open_note_request;
use crate::mcp::contracts::TOOL_OPEN_NOTE;
use crate::tools::{client_error_result, error_result, success_result};
use serde_json::Value;

pub fn call<O: Opener>(client: &NoteClient<O>, args: &Value) -> Value {
    let request = match open_note_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    match client.open_note(&request) {
        Ok(outcome) => success_result(format!("Bear note opened: {}", target(&request)), &outcome),
        Err(err) => client_error_result(&err, TOOL_OPEN_NOTE),
    }
}

fn target(request: &OpenNoteRequest) -> String {
    match (&request.title, &request.id) {
        (Some(title), _) => title.clone(),
        (None, Some(id)) => format!("ID: {id}"),
        (None, None) => String::new(),
    }
}
