use serde_json::json;

pub const TOOL_WRITE_NOTE: &str = "write_note";
pub const TOOL_OPEN_NOTE: &str = "open_note";
pub const TOOL_SEARCH_NOTES: &str = "search_notes";

pub const PROTOCOL_VERSION: &str = "2025-11-25";

pub fn write_note_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Title of the note"
            },
            "text": {
                "type": "string",
                "description": "Text content of the note with markdown format"
            },
            "tags": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Tags for the note (optional)"
            }
        },
        "required": ["title", "text"]
    })
}

pub fn open_note_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Title of the note to open (mutually exclusive with id)"
            },
            "id": {
                "type": "string",
                "description": "ID of the note to open (mutually exclusive with title)"
            }
        },
        "anyOf": [
            { "required": ["title"] },
            { "required": ["id"] }
        ]
    })
}

pub fn search_notes_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "term": {
                "type": "string",
                "description": "Search term"
            },
            "tag": {
                "type": "string",
                "description": "Specific tag to search in (optional)"
            }
        },
        "required": ["term"]
    })
}
