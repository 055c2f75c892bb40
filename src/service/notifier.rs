//! Giftcard stock announcements.
//!
//! After a win the roll command asks this module whether the new stock is worth
//! announcing and, if so, publishes the announcement to the configured channel through a
//! `Notifier`. Delivery failures are logged and dropped: the user who won has already
//! been answered and must not see an error because the announcement channel is gone.

use dioxus_logger::tracing;
use serenity::{
    all::{ChannelId, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::error::notify::NotifyError;

const LOW_STOCK_ANNOUNCEMENT: &str =
    "@here there's only 1 Giftcard left, goodluck users! Try your luck by using command `/roll`";
const EVENT_ENDED_ANNOUNCEMENT: &str =
    "@here, looks like all Giftcards are received. The event ends here, thanks for playing!";

/// Delivery of a text message to a broadcast destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, message: &str) -> Result<(), NotifyError>;
}

/// Announcement for a stock level, if that level is worth announcing.
///
/// # Returns
/// - `Some(low stock message)` - Exactly one giftcard left
/// - `Some(event ended message)` - No giftcards left
/// - `None` - Any other count
pub fn announcement_for(giftcards_remaining: u32) -> Option<&'static str> {
    match giftcards_remaining {
        0 => Some(EVENT_ENDED_ANNOUNCEMENT),
        1 => Some(LOW_STOCK_ANNOUNCEMENT),
        _ => None,
    }
}

/// Publishes the announcement for `giftcards_remaining`, swallowing delivery failures.
///
/// # Arguments
/// - `notifier` - Destination of the announcement
/// - `giftcards_remaining` - Stock right after the win
///
/// # Returns
/// - `Some(message)` - An announcement was due (whether or not delivery succeeded)
/// - `None` - Nothing to announce
pub async fn announce_giftcard_status(
    notifier: &dyn Notifier,
    giftcards_remaining: u32,
) -> Option<&'static str> {
    let message = announcement_for(giftcards_remaining)?;

    if let Err(e) = notifier.publish(message).await {
        tracing::error!("Unable to publish giftcard announcement: {}", e);
    }

    Some(message)
}

/// Posts announcements to a Discord channel through the bot's HTTP client.
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn publish(&self, message: &str) -> Result<(), NotifyError> {
        let channel = self
            .http
            .get_channel(self.channel_id)
            .await
            .map_err(|e| NotifyError::ChannelUnavailable {
                channel_id: self.channel_id.get(),
                reason: e.to_string(),
            })?;

        channel
            .id()
            .send_message(&self.http, CreateMessage::new().content(message))
            .await?;

        Ok(())
    }
}
