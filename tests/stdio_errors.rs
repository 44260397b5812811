#![cfg(unix)]

use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

fn send_request(
    stdin: &mut std::process::ChildStdin,
    stdout: &mut BufReader<std::process::ChildStdout>,
    request: serde_json::Value,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;
    let response: serde_json::Value = serde_json::from_str(line.trim())?;
    Ok(response)
}

#[test]
fn failing_opener_surfaces_dispatch_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-bear"))
        .args(["serve", "--stdio", "--opener", "false"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let arguments = [
        ("write_note", serde_json::json!({"title": "T", "text": "body"})),
        ("open_note", serde_json::json!({"id": "ABC"})),
        ("search_notes", serde_json::json!({"term": "foo"})),
    ];

    for (id, (name, args)) in arguments.into_iter().enumerate() {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 40 + id,
            "method": "tools/call",
            "params": {"name": name, "arguments": args}
        });
        let response = send_request(&mut stdin, &mut stdout, request)?;
        let result = response.get("result").expect("result present");
        assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));

        let error = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .expect("error present");
        assert_eq!(
            error.get("kind").and_then(|v| v.as_str()),
            Some("dispatch_failed")
        );
        assert_eq!(error.get("source").and_then(|v| v.as_str()), Some(name));
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .expect("message present");
        assert!(message.starts_with("false exited with"), "{message}");
    }

    let _ = child.kill();
    Ok(())
}

#[test]
fn missing_opener_surfaces_spawn_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-bear"))
        .args(["serve", "--stdio", "--opener", "/definitely/missing/opener"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 50,
        "method": "tools/call",
        "params": {"name": "search_notes", "arguments": {"term": "foo"}}
    });
    let response = send_request(&mut stdin, &mut stdout, request)?;
    let message = response
        .get("result")
        .and_then(|value| value.get("structuredContent"))
        .and_then(|value| value.get("error"))
        .and_then(|value| value.get("message"))
        .and_then(|value| value.as_str())
        .expect("message present");
    assert!(
        message.starts_with("failed to spawn /definitely/missing/opener"),
        "{message}"
    );

    let _ = child.kill();
    Ok(())
}

#[test]
fn unknown_tool_and_method_are_protocol_errors() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-bear"))
        .args(["serve", "--stdio", "--opener", "false"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 60,
        "method": "tools/call",
        "params": {"name": "delete_note", "arguments": {}}
    });
    let response = send_request(&mut stdin, &mut stdout, request)?;
    assert!(response.get("result").is_none());
    let error = response.get("error").expect("error present");
    assert_eq!(error.get("code").and_then(|v| v.as_i64()), Some(-32602));
    assert_eq!(
        error.get("message").and_then(|v| v.as_str()),
        Some("unknown tool: delete_note")
    );

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 61,
        "method": "resources/list"
    });
    let response = send_request(&mut stdin, &mut stdout, request)?;
    let error = response.get("error").expect("error present");
    assert_eq!(error.get("code").and_then(|v| v.as_i64()), Some(-32601));
    assert_eq!(response.get("id").and_then(|v| v.as_i64()), Some(61));

    let _ = child.kill();
    Ok(())
}
