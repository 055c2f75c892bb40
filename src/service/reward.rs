//! Reward engine.
//!
//! This module provides the `RewardService`, which executes one attempt at winning a
//! giftcard. An attempt draws a uniform value in `[0, 1)` and wins when the draw is at or
//! below the user's success chance. Winning takes a giftcard and resets the user's chance
//! to 1%; losing raises it by one point, up to 100%. Every completed attempt renews the
//! user's cooldown. When no giftcards remain the attempt ends immediately without
//! drawing or writing anything.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use rand::Rng;

use crate::{
    data::{cooldown::CooldownRepository, reward::RewardRepository},
    error::storage::StorageError,
    model::{
        reward::{AttemptOutcome, AttemptResult, DEFAULT_SUCCESS_CHANCE, MAX_SUCCESS_CHANCE},
        UserId,
    },
    service::cooldown::CooldownService,
};

/// Source of the uniform draw deciding an attempt.
pub trait RollDraw: Send + Sync {
    /// Returns a value in `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Draws from the thread-local random number generator.
pub struct ThreadRngDraw;

impl RollDraw for ThreadRngDraw {
    fn draw(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Returns `true` if `draw` wins against a success chance of `success_chance` percent.
///
/// The comparison is inclusive and unrounded: a 0% chance still wins on a draw of exactly 0.
pub fn is_winning_draw(draw: f64, success_chance: u8) -> bool {
    draw <= f64::from(success_chance) / 100.0
}

pub struct RewardService<'a, R: RewardRepository, C: CooldownRepository> {
    rewards: &'a R,
    cooldowns: CooldownService<'a, C>,
    draw: &'a dyn RollDraw,
    cooldown: chrono::Duration,
}

impl<'a, R: RewardRepository, C: CooldownRepository> RewardService<'a, R, C> {
    /// Creates a new RewardService instance.
    ///
    /// # Arguments
    /// - `rewards` - Reward state repository
    /// - `cooldowns` - Cooldown ledger repository, renewed after every completed attempt
    /// - `draw` - Source of the uniform draw
    /// - `cooldown` - Cooldown applied after every completed attempt
    ///
    /// # Returns
    /// - `RewardService` - New service instance
    pub fn new(
        rewards: &'a R,
        cooldowns: &'a C,
        draw: &'a dyn RollDraw,
        cooldown: chrono::Duration,
    ) -> Self {
        Self {
            rewards,
            cooldowns: CooldownService::new(cooldowns),
            draw,
            cooldown,
        }
    }

    /// Executes one attempt for `user` at `now`.
    ///
    /// The caller must already have passed the cooldown gate. The reward state is saved
    /// before the cooldown is renewed; both writes are the last steps of the attempt.
    ///
    /// # Arguments
    /// - `user` - Discord user attempting to roll
    /// - `now` - Start of the renewed cooldown
    ///
    /// # Returns
    /// - `Ok(AttemptOutcome::EventEnded)` - No giftcards left; nothing written
    /// - `Ok(AttemptOutcome::Completed(result))` - Attempt drawn and persisted
    /// - `Err(StorageError)` - A document could not be read or written
    pub fn attempt_at(
        &self,
        user: UserId,
        now: DateTime<Utc>,
    ) -> Result<AttemptOutcome, StorageError> {
        let mut state = self.rewards.load()?;

        if state.is_event_over() {
            return Ok(AttemptOutcome::EventEnded);
        }

        let success_chance = state.success_chance(user);
        let draw = self.draw.draw();

        tracing::info!(
            "User {} rolled {:.4} with success chance {}%",
            user,
            draw,
            success_chance
        );

        let result = if is_winning_draw(draw, success_chance) {
            state.claim_giftcard();
            state.set_success_chance(user, DEFAULT_SUCCESS_CHANCE);

            tracing::info!(
                "User {} won a giftcard; {} remaining",
                user,
                state.giftcards_remaining
            );

            AttemptResult::new(true, state.giftcards_remaining, DEFAULT_SUCCESS_CHANCE)
        } else {
            let next_chance = success_chance.saturating_add(1).min(MAX_SUCCESS_CHANCE);
            state.set_success_chance(user, next_chance);

            AttemptResult::new(false, state.giftcards_remaining, next_chance)
        };

        self.rewards.save(&state)?;
        self.cooldowns.renew_at(user, self.cooldown, now)?;

        Ok(AttemptOutcome::Completed(result))
    }
}
