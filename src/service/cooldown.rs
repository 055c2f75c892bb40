//! Cooldown ledger service.
//!
//! This module provides the `CooldownService` which owns the rules around the persistent
//! roll cooldown: a user on cooldown is denied with the remaining wait, expired or
//! unreadable entries are dropped on sight, and every attempt renews the user's expiry.
//! Each operation is a full load-mutate-save round trip on the cooldown document; callers
//! are expected to hold the store lock for the duration of their transaction.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    data::cooldown::CooldownRepository,
    error::storage::StorageError,
    model::{
        cooldown::{CooldownEntry, CooldownStatus, PurgeReport},
        UserId,
    },
};

pub struct CooldownService<'a, C: CooldownRepository> {
    repo: &'a C,
}

impl<'a, C: CooldownRepository> CooldownService<'a, C> {
    /// Creates a new CooldownService instance.
    ///
    /// # Arguments
    /// - `repo` - Reference to the cooldown ledger repository
    ///
    /// # Returns
    /// - `CooldownService` - New service instance
    pub fn new(repo: &'a C) -> Self {
        Self { repo }
    }

    /// Checks whether `user` may roll at `now`.
    ///
    /// An entry whose expiry is still in the future denies access and is left untouched.
    /// An expired entry is removed and access is allowed. An entry with an unreadable
    /// timestamp is treated as expired: it is removed with a warning and access is allowed.
    ///
    /// # Arguments
    /// - `user` - Discord user attempting to roll
    /// - `now` - Reference time
    ///
    /// # Returns
    /// - `Ok(CooldownStatus::Allowed)` - No active cooldown
    /// - `Ok(CooldownStatus::Denied)` - Active cooldown with the remaining wait
    /// - `Err(StorageError)` - Ledger could not be read or written
    pub fn check_and_gate_at(
        &self,
        user: UserId,
        now: DateTime<Utc>,
    ) -> Result<CooldownStatus, StorageError> {
        let mut ledger = self.repo.load()?;

        match ledger.entry_at(user, now) {
            CooldownEntry::Absent => Ok(CooldownStatus::Allowed),
            CooldownEntry::Active(expiry) => {
                let retry_after = expiry - now;
                tracing::debug!(
                    "User {} is on cooldown for another {}s",
                    user,
                    retry_after.num_seconds()
                );

                Ok(CooldownStatus::Denied { retry_after })
            }
            CooldownEntry::Expired(_) => {
                ledger.remove(user);
                self.repo.save(&ledger)?;

                Ok(CooldownStatus::Allowed)
            }
            CooldownEntry::Malformed(raw) => {
                tracing::warn!(
                    "Invalid cooldown timestamp '{}' for user {}; removing entry.",
                    raw,
                    user
                );
                ledger.remove(user);
                self.repo.save(&ledger)?;

                Ok(CooldownStatus::Allowed)
            }
        }
    }

    /// Sets the expiry of `user` to `now + duration`, overwriting any previous entry.
    ///
    /// An expiry past the representable range is stored as the latest representable time.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - The stored expiry
    /// - `Err(StorageError)` - Ledger could not be read or written
    pub fn renew_at(
        &self,
        user: UserId,
        duration: chrono::Duration,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, StorageError> {
        let mut ledger = self.repo.load()?;
        let expiry = now
            .checked_add_signed(duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        ledger.set_expiry(user, expiry);
        self.repo.save(&ledger)?;

        Ok(expiry)
    }

    /// Removes every expired or unreadable entry from the ledger.
    pub fn garbage_collect(&self) -> Result<PurgeReport, StorageError> {
        self.garbage_collect_at(Utc::now())
    }

    /// Removes every entry whose expiry is at or before `now`, plus unreadable entries.
    ///
    /// Each unreadable entry is logged before removal. The ledger is only written when
    /// something was removed, so running this twice in a row leaves the second pass a no-op.
    ///
    /// # Returns
    /// - `Ok(PurgeReport)` - Users removed, split by reason
    /// - `Err(StorageError)` - Ledger could not be read or written
    pub fn garbage_collect_at(&self, now: DateTime<Utc>) -> Result<PurgeReport, StorageError> {
        let mut ledger = self.repo.load()?;
        let report = ledger.purge_at(now);

        for user in &report.malformed {
            tracing::warn!("Invalid cooldown timestamp for user {}; removing entry.", user);
        }

        if report.removed() == 0 {
            tracing::debug!("No expired cooldown entries to remove");
            return Ok(report);
        }

        self.repo.save(&ledger)?;
        tracing::info!("Removed {} expired cooldown entries.", report.removed());

        Ok(report)
    }
}
