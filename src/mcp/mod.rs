use serde_json::{Value, json};

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": contracts::TOOL_WRITE_NOTE,
            "description": "Write a note to Bear",
            "inputSchema": contracts::write_note_schema()
        }),
        json!({
            "name": contracts::TOOL_OPEN_NOTE,
            "description": "Open a note in Bear",
            "inputSchema": contracts::open_note_schema()
        }),
        json!({
            "name": contracts::TOOL_SEARCH_NOTES,
            "description": "Search for notes in Bear",
            "inputSchema": contracts::search_notes_schema()
        }),
    ]
}

pub fn result_response(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

pub fn error_response(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into()
        }
    })
}
