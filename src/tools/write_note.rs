use crate::bear::{NoteClient, Opener};
use crate::input::write_note_request;
use crate::mcp::contracts::TOOL_WRITE_NOTE;
use crate::tools::{client_error_result, error_result, success_result};
use serde_json::Value;

pub fn call<O: Opener>(client: &NoteClient<O>, args: &Value) -> Value {
    let request = match write_note_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    match client.create_note(&request) {
        Ok(outcome) => success_result(format!("Note created in Bear: {}", request.title), &outcome),
        Err(err) => client_error_result(&err, TOOL_WRITE_NOTE),
    }
}
