//! Error types for gcswitch.

use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias using gcswitch's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing, selecting or activating configurations.
#[derive(Error, Debug)]
pub enum Error {
    /// The external tool could not be started at all.
    #[error("failed to run '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited unsuccessfully.
    #[error("'{command}' failed ({status}): {output}")]
    ExternalTool {
        command: String,
        status: ExitStatus,
        output: String,
    },

    /// The listing output was not the JSON we expect.
    #[error("decoding configuration list {output:?}: {source}")]
    Decode {
        output: String,
        #[source]
        source: serde_json::Error,
    },

    /// The terminal UI could not be started or driven.
    #[error("terminal UI failed: {0}")]
    Ui(String),

    /// Nothing to choose from.
    #[error("no gcloud configurations found")]
    NoProfiles,

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap any error raised while driving the terminal.
    pub fn ui(err: impl std::fmt::Display) -> Self {
        Error::Ui(err.to_string())
    }
}
