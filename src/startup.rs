use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{
    config::Config,
    data::{
        cooldown::JsonCooldownRepository, hunt_profile::JsonProfileStore,
        reward::JsonRewardRepository,
    },
    error::AppError,
    service::{
        reward::ThreadRngDraw,
        roll::{GiftcardStore, RollService},
    },
};

pub const STATE_FILE: &str = "state.json";
pub const COOLDOWN_FILE: &str = "cooldowns.json";
pub const HUNT_PROFILES_FILE: &str = "hunt_profiles.json";

/// Builds the roll service over the documents in the configured data directory.
///
/// Documents are not touched here; missing files are created on first save.
pub fn build_roll_service(config: &Config) -> RollService {
    let store = GiftcardStore {
        rewards: JsonRewardRepository::new(
            config.data_dir.join(STATE_FILE),
            config.roll.total_giftcards,
        ),
        cooldowns: JsonCooldownRepository::new(config.data_dir.join(COOLDOWN_FILE)),
    };

    RollService::new(store, Arc::new(ThreadRngDraw), config.roll)
}

pub fn build_profile_store(config: &Config) -> JsonProfileStore {
    JsonProfileStore::new(config.data_dir.join(HUNT_PROFILES_FILE))
}

/// Purges cooldowns that lapsed while the bot was offline.
///
/// # Returns
/// - `Ok(())` - Ledger cleaned (or nothing to clean)
/// - `Err(AppError::StorageErr)` - Ledger could not be read or written
pub async fn collect_expired_cooldowns(roll: &RollService) -> Result<(), AppError> {
    let report = roll.garbage_collect().await?;

    tracing::info!(
        "Startup cooldown cleanup removed {} entries",
        report.removed()
    );

    Ok(())
}
