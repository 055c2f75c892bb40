//! Service layer for the giftcard event.
//!
//! This module sits between the Discord command handlers and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Cooldown Ledger** (`cooldown`): gating, renewing and purging per-user cooldowns
//! - **Reward Engine** (`reward`): the single attempt transaction on the reward state
//! - **Roll orchestration** (`roll`): running gate and attempt under one lock
//! - **Notifier** (`notifier`): broadcasting stock announcements after a win

pub mod cooldown;
pub mod notifier;
pub mod reward;
pub mod roll;
