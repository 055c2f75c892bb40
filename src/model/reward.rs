//! Domain models for the giftcard reward state and roll results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::UserId;

/// Success chance assigned to users who have never rolled and to users who just won.
pub const DEFAULT_SUCCESS_CHANCE: u8 = 1;

/// Upper bound of a success chance, in percent.
pub const MAX_SUCCESS_CHANCE: u8 = 100;

/// Global state of the giftcard event.
///
/// Tracks how many giftcards are left and each user's current success chance. A user
/// without an entry in `user_chances` rolls with `DEFAULT_SUCCESS_CHANCE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardState {
    /// Giftcards still available; the event is over once this reaches zero.
    pub giftcards_remaining: u32,
    /// Success chance (0..=100 percent) per user.
    pub user_chances: BTreeMap<UserId, u8>,
}

impl RewardState {
    /// Creates a fresh reward state for an event with `total_giftcards` rewards.
    ///
    /// # Arguments
    /// - `total_giftcards` - Number of giftcards handed out over the whole event
    ///
    /// # Returns
    /// - `RewardState` - State with the full stock and no recorded chances
    pub fn new(total_giftcards: u32) -> Self {
        Self {
            giftcards_remaining: total_giftcards,
            user_chances: BTreeMap::new(),
        }
    }

    /// Returns `true` once every giftcard has been claimed.
    pub fn is_event_over(&self) -> bool {
        self.giftcards_remaining == 0
    }

    /// Current success chance of `user`, clamped to 0..=100.
    pub fn success_chance(&self, user: UserId) -> u8 {
        self.user_chances
            .get(&user)
            .copied()
            .unwrap_or(DEFAULT_SUCCESS_CHANCE)
            .min(MAX_SUCCESS_CHANCE)
    }

    /// Stores a new success chance for `user`, clamping it to 0..=100.
    pub fn set_success_chance(&mut self, user: UserId, chance: u8) {
        self.user_chances
            .insert(user, chance.min(MAX_SUCCESS_CHANCE));
    }

    /// Takes one giftcard from the stock. Never goes below zero.
    pub fn claim_giftcard(&mut self) {
        self.giftcards_remaining = self.giftcards_remaining.saturating_sub(1);
    }
}

/// Chances and stock reported back to the user after a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptResult {
    pub won: bool,
    /// Stock after the attempt (already decremented on a win).
    pub giftcards_remaining: u32,
    /// Success chance for the user's next attempt.
    pub success_chance: u8,
    /// Complement of `success_chance`.
    pub fail_chance: u8,
}

impl AttemptResult {
    pub(crate) fn new(won: bool, giftcards_remaining: u32, success_chance: u8) -> Self {
        Self {
            won,
            giftcards_remaining,
            success_chance,
            fail_chance: MAX_SUCCESS_CHANCE - success_chance.min(MAX_SUCCESS_CHANCE),
        }
    }
}

/// Outcome of one reward engine attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttemptOutcome {
    /// No giftcards were left; nothing was drawn, stored or renewed.
    EventEnded,
    /// A draw took place and both documents were updated.
    Completed(AttemptResult),
}
