//! Errors raised while preparing the page on the server

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Failed to read context file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid context JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
