//! Slash commands offered by the bot.

use serenity::all::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};

pub mod hunt;
pub mod roll;

/// Definitions of every command, registered globally on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![roll::definition(), hunt::definition()]
}

/// Builds a reply visible to everyone in the channel.
pub fn public_response(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content))
}

/// Builds a reply only visible to the user who invoked the command.
pub fn ephemeral_response(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}
