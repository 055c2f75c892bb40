//! Document fixtures shared across tests.
//!
//! File names mirror the ones used by the bot in its data directory.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

/// Reward state document file name.
pub const STATE_FILE: &str = "state.json";
/// Cooldown ledger document file name.
pub const COOLDOWN_FILE: &str = "cooldowns.json";
/// Hunt profiles document file name.
pub const HUNT_PROFILES_FILE: &str = "hunt_profiles.json";

/// Builds a reward state document.
///
/// # Arguments
/// - `giftcards_remaining` - Stored remaining count (may be negative to test clamping)
/// - `user_chances` - `(user_id, chance)` pairs stored under `user_chances`
///
/// # Returns
/// - `Value` - Document in the on-disk shape
pub fn reward_state(giftcards_remaining: i64, user_chances: &[(u64, i64)]) -> Value {
    let chances: Map<String, Value> = user_chances
        .iter()
        .map(|(user, chance)| (user.to_string(), json!(chance)))
        .collect();

    json!({
        "giftcards_remaining": giftcards_remaining,
        "user_chances": chances,
    })
}

/// Builds a cooldown ledger document from `(user_id, raw_timestamp)` pairs.
pub fn cooldowns(entries: &[(u64, &str)]) -> Value {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(user, raw)| (user.to_string(), json!(raw)))
        .collect();

    Value::Object(map)
}

/// Formats a timestamp the way the bot stores cooldown expiries.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Stored expiry `offset` away from the current time.
pub fn expiry_from_now(offset: Duration) -> String {
    timestamp(Utc::now() + offset)
}
