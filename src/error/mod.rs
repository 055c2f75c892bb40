//! Error types and user-facing error mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and knows how to turn
//! itself into the message shown to a Discord user when a command fails unexpectedly.
//!
//! Two outcomes that look like failures are deliberately absent from this hierarchy:
//! a user being on cooldown and the event having ended are ordinary results returned
//! by the roll service, not errors.

pub mod config;
pub mod notify;
pub mod storage;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{config::ConfigError, storage::StorageError};

/// Message shown to users whenever a command fails for a reason they cannot act on.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so the `?` operator can be used across
/// layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal at startup as the bot cannot run without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Persistent store failure.
    ///
    /// Only genuine I/O or serialization failures reach this variant. Missing or
    /// corrupted documents are recovered by the store itself and never surface here.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the user.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the reply shown to the user who triggered it.
    ///
    /// Logs the full error for diagnostics, but always returns the generic message to
    /// avoid exposing file paths or other implementation details in a chat channel.
    ///
    /// # Returns
    /// - `&'static str` - The generic "try again later" message
    pub fn into_user_message(self) -> &'static str {
        tracing::error!("Command failed: {}", self);

        GENERIC_ERROR_MESSAGE
    }
}
