// Tool-level error kinds, reported in structuredContent.error.kind.
pub const INVALID_INPUT: &str = "invalid_input";
pub const DISPATCH_FAILED: &str = "dispatch_failed";

// JSON-RPC error codes.
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
