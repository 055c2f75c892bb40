use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::command::{self, hunt, roll},
    state::AppState,
};

/// Dispatches a slash command to its handler.
///
/// Handler failures are logged and answered with the generic ephemeral error message.
/// Other interaction kinds are ignored.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for the reply
/// - `interaction` - Interaction received from the gateway
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let result = match command.data.name.as_str() {
        roll::NAME => roll::run(state, &ctx, &command).await,
        hunt::NAME => hunt::run(state, &ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        let reply = command::ephemeral_response(e.into_user_message());

        if let Err(e) = command.create_response(&ctx.http, reply).await {
            tracing::error!("Failed to send error reply: {}", e);
        }
    }
}
