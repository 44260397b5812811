use crate::error::DispatchError;
use std::process::{Command, Stdio};

pub const DEFAULT_OPENER: &str = "open";

/// Hands a scheme URL to whatever application the OS has registered for it.
///
/// Success means only that the dispatch request was accepted; the target
/// application never reports back.
pub trait Opener {
    fn open(&self, url: &str) -> Result<(), DispatchError>;
}

impl<T: Opener + ?Sized> Opener for &T {
    fn open(&self, url: &str) -> Result<(), DispatchError> {
        (**self).open(url)
    }
}

/// Runs `program [args...] <url>` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandOpener {
    fn default() -> Self {
        Self::new(DEFAULT_OPENER)
    }
}

impl Opener for CommandOpener {
    fn open(&self, url: &str) -> Result<(), DispatchError> {
        // The URL goes in as a single argv entry, never through a shell.
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DispatchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            log::debug!("{} accepted {url}", self.program);
            return Ok(());
        }

        Err(DispatchError::Status {
            program: self.program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
