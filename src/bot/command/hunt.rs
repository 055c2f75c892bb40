//! `/hunt` command, showing the caller's hunt stats.

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::command::ephemeral_response,
    data::hunt_profile::ProfileStore,
    error::AppError,
    model::hunt::{HuntProfile, PROGRESS_BAR_WIDTH},
    state::AppState,
};

pub const NAME: &str = "hunt";

const HEALTH_EMOJI: &str = "<:SBHeart:1447532986378485882>";
const DEFENSE_EMOJI: &str = "<:SBDefense:1447532983933472900>";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME).description("Show your hunting stats")
}

/// Renders the stats block of a hunt profile.
pub fn stats_text(profile: &HuntProfile) -> String {
    format!(
        "## Hunting Stat\n### Hunt Level: {}\n-# {} `{} / {} - {:.2}%`\n* User Health: {} {}\n* User Defense: {} {}",
        profile.level,
        profile.xp_progress_bar(PROGRESS_BAR_WIDTH),
        profile.xp,
        profile.next_level_xp,
        profile.xp_percent(),
        profile.health,
        HEALTH_EMOJI,
        profile.defense,
        DEFENSE_EMOJI,
    )
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let profile = state.profiles.lock().await.get(command.user.id.get())?;

    command
        .create_response(&ctx.http, ephemeral_response(stats_text(&profile)))
        .await?;

    Ok(())
}
