//! Reward state repository.
//!
//! This module provides the `RewardRepository` trait and its JSON-file implementation.
//! The document shape is `{ "giftcards_remaining": <int>, "user_chances": { "<user_id>": <int> } }`.
//! Documents missing either field are upgraded with the defaults of a fresh event, and a
//! bad value only resets the field or entry holding it.

use dioxus_logger::tracing;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    data::document::{integer_value, json_kind, user_entries, JsonDocument},
    error::storage::StorageError,
    model::{
        reward::{RewardState, MAX_SUCCESS_CHANCE},
        UserId,
    },
};

/// Load/save access to the reward state document.
pub trait RewardRepository {
    /// Loads the reward state, falling back to a fresh state if the document is missing
    /// or corrupted.
    fn load(&self) -> Result<RewardState, StorageError>;

    /// Overwrites the stored reward state.
    fn save(&self, state: &RewardState) -> Result<(), StorageError>;
}

/// Converts the raw document into a valid `RewardState`.
///
/// Each field is validated on its own. Numbers are floored and clamped into range
/// (`giftcards_remaining` >= 0, chances 0..=100), so a hand-edited or older document
/// never loses its stock. A `giftcards_remaining` that is absent or not a number takes
/// the fresh-event stock; chance entries with a bad key or a non-numeric value are dropped.
///
/// # Arguments
/// - `document` - Top-level object of the reward document
/// - `total_giftcards` - Stock used when `giftcards_remaining` is unusable
fn state_from_document(mut document: Map<String, Value>, total_giftcards: u32) -> RewardState {
    let giftcards_remaining = match document.remove("giftcards_remaining") {
        None | Some(Value::Null) => total_giftcards,
        Some(value) => match integer_value(&value) {
            Some(remaining) => u32::try_from(remaining.max(0)).unwrap_or(u32::MAX),
            None => {
                tracing::warn!(
                    "Reward state giftcards_remaining is {}; using the initial stock of {}",
                    json_kind(&value),
                    total_giftcards
                );
                total_giftcards
            }
        },
    };

    let user_chances = match document.remove("user_chances") {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(entries)) => user_entries(entries, "user_chances")
            .filter_map(|(user, value)| match integer_value(&value) {
                Some(chance) => Some((user, chance.clamp(0, i64::from(MAX_SUCCESS_CHANCE)) as u8)),
                None => {
                    tracing::warn!(
                        "Dropping success chance of user {}: expected a number, found {}",
                        user,
                        json_kind(&value)
                    );
                    None
                }
            })
            .collect::<BTreeMap<UserId, u8>>(),
        Some(other) => {
            tracing::warn!(
                "Reward state user_chances is {}; resetting all chances",
                json_kind(&other)
            );
            BTreeMap::new()
        }
    };

    RewardState {
        giftcards_remaining,
        user_chances,
    }
}

/// Reward state stored as a JSON file.
pub struct JsonRewardRepository {
    document: JsonDocument,
    total_giftcards: u32,
}

impl JsonRewardRepository {
    /// Creates a new JsonRewardRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the reward state document
    /// - `total_giftcards` - Stock of a fresh event, used when the document is missing,
    ///   corrupted or lacks `giftcards_remaining`
    ///
    /// # Returns
    /// - `JsonRewardRepository` - New repository instance
    pub fn new(path: impl Into<PathBuf>, total_giftcards: u32) -> Self {
        Self {
            document: JsonDocument::new(path),
            total_giftcards,
        }
    }
}

impl RewardRepository for JsonRewardRepository {
    fn load(&self) -> Result<RewardState, StorageError> {
        Ok(match self.document.read_object()? {
            Some(document) => state_from_document(document, self.total_giftcards),
            None => RewardState::new(self.total_giftcards),
        })
    }

    fn save(&self, state: &RewardState) -> Result<(), StorageError> {
        self.document.write(state)
    }
}
