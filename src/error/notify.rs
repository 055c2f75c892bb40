use thiserror::Error;

/// Failures delivering an announcement to the broadcast channel.
///
/// These never reach the user who rolled; `announce_giftcard_status` logs and drops them.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The announcement channel could not be resolved.
    #[error("Announcement channel {channel_id} is unavailable: {reason}")]
    ChannelUnavailable {
        /// Discord channel ID that was looked up
        channel_id: u64,
        /// Why the lookup failed
        reason: String,
    },

    /// Discord rejected the message.
    #[error("Failed to send announcement: {0}")]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for NotifyError {
    fn from(err: serenity::Error) -> Self {
        NotifyError::Discord(Box::new(err))
    }
}
