//! Output sinks.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Destination for named string outputs.
pub trait OutputSink {
    /// Sets one output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be persisted.
    fn set(&mut self, name: &str, value: &str) -> io::Result<()>;
}

/// Sink that appends to a `GITHUB_OUTPUT`-style file.
///
/// Single-line values are written as `name=value`; values containing
/// newlines use the heredoc form the CI system understands.
pub struct GithubOutputFile {
    file: File,
}

impl GithubOutputFile {
    /// Opens the output file for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl OutputSink for GithubOutputFile {
    fn set(&mut self, name: &str, value: &str) -> io::Result<()> {
        if value.contains('\n') || value.contains('\r') {
            let delimiter = heredoc_delimiter(value);
            writeln!(self.file, "{name}<<{delimiter}\n{value}\n{delimiter}")
        } else {
            writeln!(self.file, "{name}={value}")
        }
    }
}

/// Picks a heredoc delimiter that does not occur in the value.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = String::from("EOF");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    delimiter
}

/// In-memory sink preserving emission order. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    outputs: Vec<(String, String)>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all outputs in emission order.
    #[must_use]
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Returns the value of the named output, if emitted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputSink for MemorySink {
    fn set(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }
}
