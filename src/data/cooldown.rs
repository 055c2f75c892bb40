//! Cooldown ledger repository.
//!
//! The document is a flat map `{ "<user_id>": "<timestamp>" }`. Only keys are validated
//! here; timestamps are validated lazily by the cooldown service so one bad entry does not
//! reset every user's cooldown.

use serde_json::Value;
use std::path::PathBuf;

use crate::{
    data::document::{user_entries, JsonDocument},
    error::storage::StorageError,
    model::cooldown::CooldownLedger,
};

/// Load/save access to the cooldown ledger document.
pub trait CooldownRepository {
    /// Loads the ledger, falling back to an empty ledger if the document is missing or
    /// corrupted.
    fn load(&self) -> Result<CooldownLedger, StorageError>;

    /// Overwrites the stored ledger.
    fn save(&self, ledger: &CooldownLedger) -> Result<(), StorageError>;
}

/// Cooldown ledger stored as a JSON file.
pub struct JsonCooldownRepository {
    document: JsonDocument,
}

impl JsonCooldownRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }
}

impl CooldownRepository for JsonCooldownRepository {
    fn load(&self) -> Result<CooldownLedger, StorageError> {
        let mut ledger = CooldownLedger::new();

        let Some(entries) = self.document.read_object()? else {
            return Ok(ledger);
        };

        for (user, value) in user_entries(entries, "cooldown") {
            // Non-string expiries are kept as their JSON text so the gate sees them as malformed
            match value {
                Value::String(raw) => ledger.insert_raw(user, raw),
                other => ledger.insert_raw(user, other.to_string()),
            }
        }

        Ok(ledger)
    }

    fn save(&self, ledger: &CooldownLedger) -> Result<(), StorageError> {
        self.document.write(ledger)
    }
}
