use crate::bear::{NoteClient, Opener, OperationResult};
use crate::error::BearError;
use crate::mcp::{contracts, errors};
use serde_json::{Value, json};

pub mod open_note;
pub mod search_notes;
pub mod write_note;

/// Routes a tool call by name. Only an unknown name is an `Err`; every other
/// failure comes back as an `isError` tool result.
pub fn dispatch<O: Opener>(
    client: &NoteClient<O>,
    name: &str,
    args: &Value,
) -> Result<Value, BearError> {
    match name {
        contracts::TOOL_WRITE_NOTE => Ok(write_note::call(client, args)),
        contracts::TOOL_OPEN_NOTE => Ok(open_note::call(client, args)),
        contracts::TOOL_SEARCH_NOTES => Ok(search_notes::call(client, args)),
        _ => Err(BearError::UnknownTool(name.to_string())),
    }
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

/// Maps a client failure onto a tool error result, naming the tool as source.
pub fn client_error_result(err: &BearError, tool: &str) -> Value {
    let kind = match err {
        BearError::Dispatch(_) => errors::DISPATCH_FAILED,
        BearError::Validation(_) | BearError::UnknownTool(_) => errors::INVALID_INPUT,
    };
    error_result(kind, err.to_string(), Some(tool))
}

pub fn success_result(summary: String, outcome: &OperationResult) -> Value {
    json!({
        "content": [{"type": "text", "text": summary}],
        "structuredContent": {
            "success": outcome.success,
            "message": outcome.message,
            "url": outcome.url
        },
        "isError": false
    })
}
