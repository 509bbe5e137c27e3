use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of the command-line layer, classified by the resource involved.
#[derive(Debug, Error)]
pub enum CliError {
    /// The corpus file could not be read.
    #[error("failed to read corpus file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The corpus could not be downloaded.
    #[error("failed to fetch corpus from {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    /// An argument passed validation by the parser but is still unusable.
    #[error("invalid argument: {0}")]
    Argument(String),
}
