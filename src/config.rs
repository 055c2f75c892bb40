//! Environment-based application configuration.

use std::{path::PathBuf, str::FromStr};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_ANNOUNCEMENT_CHANNEL_ID: u64 = 1372572234949853367;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TOTAL_GIFTCARDS: u32 = 2;
const DEFAULT_ROLL_COOLDOWN_HOURS: i64 = 24;
/// Ten years; keeps every renewed expiry well inside chrono's range.
const MAX_ROLL_COOLDOWN_HOURS: i64 = 87_600;
const DEFAULT_COOLDOWN_CLEANUP_CRON: &str = "0 0 * * * *";

pub struct Config {
    pub discord_bot_token: String,

    /// Channel that receives low-stock and end-of-event announcements.
    pub announcement_channel_id: u64,

    /// Directory holding the reward, cooldown and hunt profile documents.
    pub data_dir: PathBuf,

    pub roll: RollSettings,

    /// Six-field cron expression for the periodic cooldown cleanup job.
    pub cooldown_cleanup_cron: String,
}

/// Tunables of the giftcard event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollSettings {
    /// Giftcards available when the reward state is created for the first time.
    pub total_giftcards: u32,
    /// Cooldown applied after every attempt, won or lost.
    pub cooldown: chrono::Duration,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            total_giftcards: DEFAULT_TOTAL_GIFTCARDS,
            cooldown: chrono::Duration::hours(DEFAULT_ROLL_COOLDOWN_HOURS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            announcement_channel_id: parse_optional_env(
                "ANNOUNCEMENT_CHANNEL_ID",
                DEFAULT_ANNOUNCEMENT_CHANNEL_ID,
            )?,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            roll: RollSettings {
                total_giftcards: parse_optional_env("TOTAL_GIFTCARDS", DEFAULT_TOTAL_GIFTCARDS)?,
                cooldown: parse_cooldown_env("ROLL_COOLDOWN_HOURS", DEFAULT_ROLL_COOLDOWN_HOURS)?,
            },
            cooldown_cleanup_cron: std::env::var("COOLDOWN_CLEANUP_CRON")
                .unwrap_or_else(|_| DEFAULT_COOLDOWN_CLEANUP_CRON.to_string()),
        })
    }
}

/// Reads an optional numeric environment variable, falling back to `default` when unset.
///
/// # Arguments
/// - `name` - Environment variable name
/// - `default` - Value used when the variable is not set
///
/// # Returns
/// - `Ok(T)` - Parsed value or the default
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but does not parse as `T`
fn parse_optional_env<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}

/// Reads an optional cooldown length in whole hours.
///
/// # Returns
/// - `Ok(Duration)` - Cooldown between 0 and `MAX_ROLL_COOLDOWN_HOURS` hours
/// - `Err(ConfigError::InvalidEnvVar)` - Not a number, negative, or above the maximum
fn parse_cooldown_env(name: &str, default_hours: i64) -> Result<chrono::Duration, ConfigError> {
    let hours: i64 = parse_optional_env(name, default_hours)?;

    if !(0..=MAX_ROLL_COOLDOWN_HOURS).contains(&hours) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: hours.to_string(),
        });
    }

    Ok(chrono::Duration::hours(hours))
}
