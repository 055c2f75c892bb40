//! Domain models for the persistent roll cooldown ledger.
//!
//! Expiry timestamps are kept as the raw strings found in the document so that a single
//! malformed entry can be detected and dropped without discarding the whole ledger.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::UserId;

/// Per-user cooldown expiries, persisted as `{ "<user_id>": "<RFC 3339 timestamp>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CooldownLedger {
    entries: BTreeMap<UserId, String>,
}

/// State of one ledger entry evaluated against the current time.
#[derive(Debug, Clone, PartialEq)]
pub enum CooldownEntry {
    /// No entry stored for the user.
    Absent,
    /// Expiry is still in the future.
    Active(DateTime<Utc>),
    /// Expiry is at or before now; logically absent.
    Expired(DateTime<Utc>),
    /// Stored value is not a readable timestamp.
    Malformed(String),
}

/// Result of the cooldown gate for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    Allowed,
    /// The user must wait `retry_after` before rolling again.
    Denied { retry_after: chrono::Duration },
}

/// Entries dropped by a purge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeReport {
    pub expired: Vec<UserId>,
    pub malformed: Vec<UserId>,
}

impl PurgeReport {
    pub fn removed(&self) -> usize {
        self.expired.len() + self.malformed.len()
    }
}

impl CooldownLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw stored expiry for `user`, exactly as found in the document.
    #[cfg(test)]
    pub fn raw_expiry(&self, user: UserId) -> Option<&str> {
        self.entries.get(&user).map(String::as_str)
    }

    /// Classifies the entry for `user` relative to `now`.
    ///
    /// An expiry equal to `now` counts as expired.
    pub fn entry_at(&self, user: UserId, now: DateTime<Utc>) -> CooldownEntry {
        match self.entries.get(&user) {
            None => CooldownEntry::Absent,
            Some(raw) => match parse_timestamp(raw) {
                Ok(expiry) if expiry > now => CooldownEntry::Active(expiry),
                Ok(expiry) => CooldownEntry::Expired(expiry),
                Err(_) => CooldownEntry::Malformed(raw.clone()),
            },
        }
    }

    /// Sets the expiry of `user`, overwriting any previous entry.
    pub fn set_expiry(&mut self, user: UserId, expiry: DateTime<Utc>) {
        self.entries.insert(user, format_timestamp(expiry));
    }

    /// Inserts a raw value without validation. Used when loading documents.
    pub fn insert_raw(&mut self, user: UserId, raw: impl Into<String>) {
        self.entries.insert(user, raw.into());
    }

    /// Removes the entry of `user`, returning whether one existed.
    pub fn remove(&mut self, user: UserId) -> bool {
        self.entries.remove(&user).is_some()
    }

    /// Drops every expired or malformed entry, keeping only expiries after `now`.
    ///
    /// # Arguments
    /// - `now` - Reference time for expiry comparison
    ///
    /// # Returns
    /// - `PurgeReport` - User IDs removed, split by reason
    pub fn purge_at(&mut self, now: DateTime<Utc>) -> PurgeReport {
        let mut report = PurgeReport::default();

        self.entries.retain(|user, raw| match parse_timestamp(raw) {
            Ok(expiry) if expiry > now => true,
            Ok(_) => {
                report.expired.push(*user);
                false
            }
            Err(_) => {
                report.malformed.push(*user);
                false
            }
        });

        report
    }
}

/// Formats an expiry the way it is stored: RFC 3339, microsecond precision, `+00:00`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parses a stored expiry.
///
/// Accepts RFC 3339 timestamps with any offset, and naive ISO-8601 timestamps which are
/// interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();

    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Ok(timestamp.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()),
    }
}
