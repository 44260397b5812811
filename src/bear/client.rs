use super::opener::Opener;
use super::url;
use crate::error::Result;

pub const CREATED_MESSAGE: &str = "Note created successfully in Bear";
pub const OPENED_MESSAGE: &str = "Note opened successfully in Bear";
pub const SEARCHED_MESSAGE: &str = "Search executed successfully in Bear";

#[derive(Debug, Clone, Default)]
pub struct CreateNoteRequest {
    pub title: String,
    /// Markdown body.
    pub text: String,
    pub tags: Vec<String>,
}

/// Exactly one identifier is expected; `title` wins if both are set.
#[derive(Debug, Clone, Default)]
pub struct OpenNoteRequest {
    pub title: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchNotesRequest {
    pub term: String,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub success: bool,
    pub message: &'static str,
    pub url: String,
}

/// Drives Bear through its x-callback-url scheme.
#[derive(Debug, Clone)]
pub struct NoteClient<O> {
    opener: O,
}

impl<O: Opener> NoteClient<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    pub fn create_note(&self, request: &CreateNoteRequest) -> Result<OperationResult> {
        let url = url::create_note_url(request)?;
        self.dispatch(url, CREATED_MESSAGE)
    }

    pub fn open_note(&self, request: &OpenNoteRequest) -> Result<OperationResult> {
        let url = url::open_note_url(request)?;
        self.dispatch(url, OPENED_MESSAGE)
    }

    pub fn search_notes(&self, request: &SearchNotesRequest) -> Result<OperationResult> {
        let url = url::search_notes_url(request)?;
        self.dispatch(url, SEARCHED_MESSAGE)
    }

    fn dispatch(&self, url: String, message: &'static str) -> Result<OperationResult> {
        log::info!("dispatching {url}");
        if let Err(err) = self.opener.open(&url) {
            log::warn!("dispatch failed: {err}");
            return Err(err.into());
        }
        Ok(OperationResult {
            success: true,
            message,
            url,
        })
    }
}
