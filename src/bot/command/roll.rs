//! `/roll` command.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse, Mentionable,
};

use crate::{
    bot::command::{ephemeral_response, public_response},
    error::AppError,
    service::{
        notifier::{announce_giftcard_status, DiscordNotifier},
        roll::RollOutcome,
    },
    state::AppState,
};

pub const NAME: &str = "roll";

const EVENT_ENDED_REPLY: &str = "All giftcards have been claimed. The event has ended.";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME).description("Try your luck for a 10$ giftcard!")
}

/// Reply to a roll, before it is turned into an interaction response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollReply {
    pub content: String,
    pub ephemeral: bool,
}

impl RollReply {
    pub fn into_response(self) -> CreateInteractionResponse {
        if self.ephemeral {
            ephemeral_response(self.content)
        } else {
            public_response(self.content)
        }
    }
}

/// Builds the reply for a roll outcome.
///
/// Wins and losses are public; cooldown and event-ended replies are only shown to the
/// user who rolled.
///
/// # Arguments
/// - `outcome` - Result of the roll transaction
/// - `mention` - Mention string of the rolling user, used in the win message
pub fn reply_for(outcome: &RollOutcome, mention: &str) -> RollReply {
    match outcome {
        RollOutcome::OnCooldown { retry_after } => RollReply {
            content: format!("You can use this command again in {}.", format_wait(*retry_after)),
            ephemeral: true,
        },
        RollOutcome::EventEnded => RollReply {
            content: EVENT_ENDED_REPLY.to_string(),
            ephemeral: true,
        },
        RollOutcome::Won(result) => RollReply {
            content: format!(
                "Congratulation, {} you have won 10$ Giftcard! Your success chance has been reset for the next roll.\n-# Your current Success chance - {}% ; Fail chance - {}%",
                mention, result.success_chance, result.fail_chance
            ),
            ephemeral: false,
        },
        RollOutcome::Lost(result) => RollReply {
            content: format!(
                "No prize this time—your success chance increased by 1% for the next roll.\n-# Your current Success chance - {}% ; Fail chance - {}%",
                result.success_chance, result.fail_chance
            ),
            ephemeral: false,
        },
    }
}

/// Formats a remaining wait as whole hours and minutes, e.g. `23h 59m`.
pub fn format_wait(retry_after: chrono::Duration) -> String {
    let seconds = retry_after.num_seconds().max(0);

    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Runs the roll transaction for the invoking user and answers the interaction.
///
/// After a win the stock announcement is published once the winner has been answered.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let outcome = state.roll.roll(command.user.id.get()).await?;

    let reply = reply_for(&outcome, &command.user.mention().to_string());
    command
        .create_response(&ctx.http, reply.into_response())
        .await?;

    if let RollOutcome::Won(result) = outcome {
        let notifier = DiscordNotifier::new(ctx.http.clone(), state.announcement_channel_id);
        announce_giftcard_status(&notifier, result.giftcards_remaining).await;
    }

    Ok(())
}
