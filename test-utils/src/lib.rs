//! Giftroll Test Utils
//!
//! Provides shared testing utilities for building tests against the giftroll JSON
//! documents. This crate offers a builder pattern for creating test contexts backed by a
//! temporary data directory that can be pre-seeded with reward, cooldown and hunt
//! profile documents, including deliberately corrupted ones.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the data directory
//! - **TestContext**: Test environment owning the temporary directory
//! - **fixture**: Helpers producing document contents and timestamps
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[test]
//! fn loads_seeded_state() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_reward_state(fixture::reward_state(1, &[(42, 50)]))
//!         .build()?;
//!
//!     let repo = JsonRewardRepository::new(test.state_path(), 2);
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
