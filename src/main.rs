use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::process;

mod bear;
mod error;
mod input;
mod mcp;
mod tools;

use bear::opener::DEFAULT_OPENER;
use bear::{CommandOpener, NoteClient, Opener};
use error::BearError;

#[derive(Parser)]
#[command(name = "mcp-bear")]
#[command(
    version,
    about = "MCP server and CLI for the Bear note-taking app"
)]
struct Cli {
    #[command(flatten)]
    opener: OpenerArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct OpenerArgs {
    /// Program that dispatches bear:// URLs to the OS
    #[arg(long, global = true, env = "BEAR_OPENER", default_value = DEFAULT_OPENER)]
    opener: String,
    /// Extra argument passed to the opener before the URL (repeatable)
    #[arg(long = "opener-arg", global = true, allow_hyphen_values = true)]
    opener_args: Vec<String>,
}

impl OpenerArgs {
    fn build(&self) -> CommandOpener {
        CommandOpener::new(&self.opener).with_args(self.opener_args.iter().cloned())
    }
}

#[derive(Args, Clone)]
struct WriteNoteArgs {
    /// Title of the note
    #[arg(long)]
    title: String,
    /// Markdown body of the note
    #[arg(long)]
    text: String,
    /// Tag to attach (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
#[command(
    group(
        clap::ArgGroup::new("target")
            .required(true)
            .multiple(true)
            .args(["title", "id"])
    )
)]
struct OpenNoteArgs {
    /// Title of the note to open (wins over --id)
    #[arg(long)]
    title: Option<String>,
    /// Bear note identifier
    #[arg(long)]
    id: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct SearchNotesArgs {
    /// Search term
    #[arg(long)]
    term: String,
    /// Restrict the search to this tag
    #[arg(long)]
    tag: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Create a note in Bear
    WriteNote(WriteNoteArgs),
    /// Open a note in Bear by title or id
    OpenNote(OpenNoteArgs),
    /// Run a search in Bear
    SearchNotes(SearchNotesArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let opener = cli.opener.build();
    log::debug!("using opener {}", opener.program());
    let client = NoteClient::new(opener);

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&client)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::WriteNote(args) => run_write_note(&client, args),
        Commands::OpenNote(args) => run_open_note(&client, args),
        Commands::SearchNotes(args) => run_search_notes(&client, args),
    }
}

fn run_write_note<O: Opener>(client: &NoteClient<O>, args: WriteNoteArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("title".to_string(), json!(args.title));
    map.insert("text".to_string(), json!(args.text));
    if !args.tags.is_empty() {
        map.insert("tags".to_string(), json!(args.tags));
    }
    let result = tools::write_note::call(client, &Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_open_note<O: Opener>(client: &NoteClient<O>, args: OpenNoteArgs) -> Result<()> {
    let mut map = Map::new();
    if let Some(title) = args.title {
        map.insert("title".to_string(), json!(title));
    }
    if let Some(id) = args.id {
        map.insert("id".to_string(), json!(id));
    }
    let result = tools::open_note::call(client, &Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_search_notes<O: Opener>(client: &NoteClient<O>, args: SearchNotesArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("term".to_string(), json!(args.term));
    if let Some(tag) = args.tag {
        map.insert("tag".to_string(), json!(tag));
    }
    let result = tools::search_notes::call(client, &Value::Object(map));
    print_tool_result(result, args.json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

fn run_stdio_server<O: Opener>(client: &NoteClient<O>) -> Result<()> {
    log::info!(
        "{} {} serving MCP over stdio",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("skipping malformed request line: {err}");
                continue;
            }
        };

        if let Some(response) = handle_request(client, &request) {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}

/// Returns `None` for notifications, which never get a response.
fn handle_request<O: Opener>(client: &NoteClient<O>, request: &Value) -> Option<Value> {
    let method = request.get("method").and_then(|value| value.as_str());
    let id = request.get("id").cloned();
    log::debug!("request method={method:?} id={id:?}");

    let id = id?;
    let response = match method {
        Some("initialize") => mcp::result_response(
            id,
            json!({
                "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        Some("ping") => mcp::result_response(id, json!({})),
        Some("tools/list") => mcp::result_response(
            id,
            json!({
                "tools": mcp::tool_definitions()
            }),
        ),
        Some("tools/call") => match handle_tool_call(client, request) {
            Ok(result) => mcp::result_response(id, result),
            Err(err) => {
                log::warn!("{err}");
                mcp::error_response(id, mcp::errors::INVALID_PARAMS, err.to_string())
            }
        },
        Some(other) => mcp::error_response(
            id,
            mcp::errors::METHOD_NOT_FOUND,
            format!("method not found: {other}"),
        ),
        None => mcp::error_response(
            id,
            mcp::errors::INVALID_REQUEST,
            "method must be a string",
        ),
    };
    Some(response)
}

fn handle_tool_call<O: Opener>(
    client: &NoteClient<O>,
    request: &Value,
) -> Result<Value, BearError> {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return Ok(tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params must be an object",
            None,
        ));
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return Ok(tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        ));
    };

    let args = params
        .get("arguments")
        .filter(|value| !value.is_null())
        .cloned()
        .unwrap_or_else(|| json!({}));

    tools::dispatch(client, name, &args)
}
