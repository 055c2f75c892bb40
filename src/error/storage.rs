use std::path::PathBuf;
use thiserror::Error;

/// Failures of the JSON document store that cannot be recovered locally.
///
/// A missing document or one containing malformed JSON is not represented here: the
/// store resets such documents to their defaults and logs a warning instead.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing, renaming or creating the parent directory of a document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the document being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The in-memory record could not be serialized to JSON.
    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        /// Path of the document being written
        path: PathBuf,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
