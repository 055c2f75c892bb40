use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing or inspecting a test data directory.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing/reading a document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document read back from disk is not valid JSON.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
