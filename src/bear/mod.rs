pub mod client;
pub mod opener;
pub mod url;

pub use client::{
    CreateNoteRequest, NoteClient, OpenNoteRequest, OperationResult, SearchNotesRequest,
};
pub use opener::{CommandOpener, Opener};
