use serde_json::Value;

use crate::{
    context::TestContext,
    error::TestError,
    fixture::{COOLDOWN_FILE, HUNT_PROFILES_FILE, STATE_FILE},
};

/// Builder for creating test contexts with pre-seeded documents.
///
/// Provides a fluent interface for configuring the temporary data directory. Add the
/// documents the test needs, then call `build()` to create the directory and write them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_reward_state(fixture::reward_state(2, &[]))
///     .with_raw_cooldowns("{ not json")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Documents to write during `build()`, as `(file name, contents)` pairs.
    ///
    /// Written in the order they were added, so a later entry for the same file wins.
    files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no documents configured.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Seeds a file with raw contents.
    ///
    /// # Arguments
    /// - `name` - File name relative to the data directory
    /// - `contents` - Exact contents to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file(mut self, name: &str, contents: impl Into<String>) -> Self {
        self.files.push((name.to_string(), contents.into()));
        self
    }

    /// Seeds the reward state document.
    pub fn with_reward_state(self, state: Value) -> Self {
        self.with_file(STATE_FILE, state.to_string())
    }

    /// Seeds the reward state document with raw, possibly corrupted, contents.
    pub fn with_raw_reward_state(self, contents: &str) -> Self {
        self.with_file(STATE_FILE, contents)
    }

    /// Seeds the cooldown ledger document.
    pub fn with_cooldowns(self, ledger: Value) -> Self {
        self.with_file(COOLDOWN_FILE, ledger.to_string())
    }

    /// Seeds the cooldown ledger document with raw, possibly corrupted, contents.
    pub fn with_raw_cooldowns(self, contents: &str) -> Self {
        self.with_file(COOLDOWN_FILE, contents)
    }

    /// Seeds the hunt profiles document.
    pub fn with_hunt_profiles(self, profiles: Value) -> Self {
        self.with_file(HUNT_PROFILES_FILE, profiles.to_string())
    }

    /// Creates the temporary directory and writes every configured document.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the data directory ready
    /// - `Err(TestError::Io)` - Directory creation or a write failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (name, contents) in &self.files {
            context.write_raw(name, contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
