use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::{
    error::TestError,
    fixture::{COOLDOWN_FILE, HUNT_PROFILES_FILE, STATE_FILE},
};

/// Test context owning a temporary data directory.
///
/// The directory and everything in it is deleted when the context is dropped, so keep
/// the context alive for the duration of the test.
pub struct TestContext {
    /// Temporary directory standing in for the bot's data directory.
    pub dir: TempDir,
}

impl TestContext {
    /// Creates a test context with an empty temporary data directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh directory
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir().map_err(|source| TestError::Io {
            path: std::env::temp_dir(),
            source,
        })?;

        Ok(Self { dir })
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn state_path(&self) -> PathBuf {
        self.path(STATE_FILE)
    }

    pub fn cooldowns_path(&self) -> PathBuf {
        self.path(COOLDOWN_FILE)
    }

    pub fn hunt_profiles_path(&self) -> PathBuf {
        self.path(HUNT_PROFILES_FILE)
    }

    /// Writes raw contents to a document in the data directory.
    ///
    /// # Arguments
    /// - `name` - File name relative to the data directory (may contain subdirectories)
    /// - `contents` - Exact bytes to write, valid JSON or not
    pub fn write_raw(&self, name: &str, contents: &str) -> Result<(), TestError> {
        let path = self.path(name);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| TestError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&path, contents).map_err(|source| TestError::Io { path, source })
    }

    /// Reads a document back as JSON.
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - Document exists and is valid JSON
    /// - `Ok(None)` - Document does not exist
    /// - `Err(TestError::Json)` - Document exists but is not valid JSON
    pub fn read_json(&self, name: &str) -> Result<Option<Value>, TestError> {
        let path = self.path(name);

        let contents = match std::fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(TestError::Io { path, source }),
        };

        serde_json::from_slice(&contents)
            .map(Some)
            .map_err(|source| TestError::Json { path, source })
    }

    /// Returns the modification time of a document, used to assert that nothing was written.
    pub fn modified(&self, name: &str) -> Option<std::time::SystemTime> {
        std::fs::metadata(self.path(name))
            .and_then(|meta| meta.modified())
            .ok()
    }
}
