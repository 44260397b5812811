use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a Note Client operation.
#[derive(Error, Debug)]
pub enum BearError {
    /// A required field was missing or empty. Raised before anything is dispatched.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

impl BearError {
    pub fn validation(message: impl Into<String>) -> Self {
        BearError::Validation(message.into())
    }
}

/// The opener could not hand the URL to the operating system.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    Status {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

pub type Result<T> = std::result::Result<T, BearError>;
