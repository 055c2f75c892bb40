//! Hunt profile repository.
//!
//! Profiles are stored together in one document keyed by user ID. Reading a profile
//! always writes the document back: new users receive the default profile and existing
//! profiles are re-saved with any fields they were missing.

use dioxus_logger::tracing;
use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    data::document::{user_entries, JsonDocument},
    error::storage::StorageError,
    model::{hunt::HuntProfile, UserId},
};

/// Per-user access to hunt profiles.
pub trait ProfileStore {
    /// Returns the profile of `user`, creating and persisting a default one if absent.
    fn get(&self, user: UserId) -> Result<HuntProfile, StorageError>;

    /// Replaces the stored profile of `user`.
    #[cfg(test)]
    fn update(&self, user: UserId, profile: &HuntProfile) -> Result<(), StorageError>;
}

/// Hunt profiles stored as a single JSON file.
pub struct JsonProfileStore {
    document: JsonDocument,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Loads every profile, dropping entries that cannot be read as a profile.
    fn load_all(&self) -> Result<BTreeMap<UserId, HuntProfile>, StorageError> {
        let Some(entries) = self.document.read_object()? else {
            return Ok(BTreeMap::new());
        };

        let profiles: BTreeMap<UserId, HuntProfile> = user_entries(entries, "hunt profile")
            .filter_map(|(user, value)| match serde_json::from_value(value) {
                Ok(profile) => Some((user, profile)),
                Err(e) => {
                    tracing::warn!("Resetting unreadable hunt profile of user {}: {}", user, e);
                    None
                }
            })
            .collect();

        Ok(profiles)
    }
}

impl ProfileStore for JsonProfileStore {
    fn get(&self, user: UserId) -> Result<HuntProfile, StorageError> {
        let mut profiles = self.load_all()?;
        let profile = profiles.entry(user).or_default().clone();

        // Persist so that new profiles and upgraded fields are written back
        self.document.write(&profiles)?;

        Ok(profile)
    }

    #[cfg(test)]
    fn update(&self, user: UserId, profile: &HuntProfile) -> Result<(), StorageError> {
        let mut profiles = self.load_all()?;
        profiles.insert(user, profile.clone());

        self.document.write(&profiles)
    }
}
