//! Roll orchestration.
//!
//! This module provides the `RollService`, the entry point used by the `/roll` command.
//! A roll is one transaction over both the cooldown ledger and the reward state: the
//! cooldown gate followed by a reward engine attempt. The two documents have no locking
//! of their own, so the whole transaction runs while holding the `GiftcardStore` mutex.
//! Concurrent rolls from different users are therefore serialized, which rules out lost
//! updates from interleaved load/mutate/save cycles.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    config::RollSettings,
    data::{
        cooldown::{CooldownRepository, JsonCooldownRepository},
        reward::{JsonRewardRepository, RewardRepository},
    },
    error::storage::StorageError,
    model::{
        cooldown::{CooldownStatus, PurgeReport},
        reward::{AttemptOutcome, AttemptResult},
        UserId,
    },
    service::{
        cooldown::CooldownService,
        reward::{RewardService, RollDraw},
    },
};

/// The two documents a roll touches, guarded together by one lock.
pub struct GiftcardStore<R = JsonRewardRepository, C = JsonCooldownRepository> {
    pub rewards: R,
    pub cooldowns: C,
}

/// Outcome of a `/roll` invocation as seen by the command handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollOutcome {
    /// The user is still on cooldown; no document was touched.
    OnCooldown { retry_after: chrono::Duration },
    /// Every giftcard has been claimed; no document was touched.
    EventEnded,
    Won(AttemptResult),
    Lost(AttemptResult),
}

pub struct RollService<R = JsonRewardRepository, C = JsonCooldownRepository> {
    store: Arc<Mutex<GiftcardStore<R, C>>>,
    draw: Arc<dyn RollDraw>,
    settings: RollSettings,
}

impl<R, C> Clone for RollService<R, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            draw: self.draw.clone(),
            settings: self.settings,
        }
    }
}

impl<R: RewardRepository, C: CooldownRepository> RollService<R, C> {
    /// Creates a new RollService instance.
    ///
    /// # Arguments
    /// - `store` - Reward and cooldown repositories; ownership moves behind the roll lock
    /// - `draw` - Source of the uniform draw
    /// - `settings` - Event tunables (cooldown length)
    ///
    /// # Returns
    /// - `RollService` - New service instance, cheap to clone
    pub fn new(store: GiftcardStore<R, C>, draw: Arc<dyn RollDraw>, settings: RollSettings) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            draw,
            settings,
        }
    }

    /// Runs the roll transaction for `user` at the current time.
    pub async fn roll(&self, user: UserId) -> Result<RollOutcome, StorageError> {
        self.roll_at(user, Utc::now()).await
    }

    /// Runs the roll transaction for `user` at `now`.
    ///
    /// A denied user is not re-stamped: the stored expiry already encodes the remaining
    /// wait, so repeated early attempts neither extend nor shorten it.
    ///
    /// # Arguments
    /// - `user` - Discord user attempting to roll
    /// - `now` - Reference time for the cooldown gate and renewal
    ///
    /// # Returns
    /// - `Ok(RollOutcome)` - Outcome of the gate and, if allowed, the attempt
    /// - `Err(StorageError)` - A document could not be read or written
    pub async fn roll_at(
        &self,
        user: UserId,
        now: DateTime<Utc>,
    ) -> Result<RollOutcome, StorageError> {
        let store = self.store.lock().await;

        let gate = CooldownService::new(&store.cooldowns).check_and_gate_at(user, now)?;
        if let CooldownStatus::Denied { retry_after } = gate {
            return Ok(RollOutcome::OnCooldown { retry_after });
        }

        let engine = RewardService::new(
            &store.rewards,
            &store.cooldowns,
            self.draw.as_ref(),
            self.settings.cooldown,
        );

        let outcome = match engine.attempt_at(user, now)? {
            AttemptOutcome::EventEnded => RollOutcome::EventEnded,
            AttemptOutcome::Completed(result) if result.won => RollOutcome::Won(result),
            AttemptOutcome::Completed(result) => RollOutcome::Lost(result),
        };

        Ok(outcome)
    }

    /// Purges expired cooldown entries under the roll lock.
    pub async fn garbage_collect(&self) -> Result<PurgeReport, StorageError> {
        let store = self.store.lock().await;

        CooldownService::new(&store.cooldowns).garbage_collect()
    }

    /// Runs `f` with exclusive access to the store.
    #[cfg(test)]
    pub async fn with_store<T>(&self, f: impl FnOnce(&GiftcardStore<R, C>) -> T) -> T {
        let store = self.store.lock().await;
        f(&store)
    }
}
