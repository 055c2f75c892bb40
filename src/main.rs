mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use dioxus_logger::tracing::{self, Level};

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::cooldown_cleanup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    let roll = startup::build_roll_service(&config);
    let profiles = startup::build_profile_store(&config);

    startup::collect_expired_cooldowns(&roll).await?;
    cooldown_cleanup::start_scheduler(roll.clone(), &config.cooldown_cleanup_cron).await?;

    tracing::info!(
        "Giftcard event running with {} giftcards, data in {}",
        config.roll.total_giftcards,
        config.data_dir.display()
    );

    let state = AppState::new(roll, profiles, config.announcement_channel_id);
    let client = init_bot(&config, state).await?;

    start_bot(client).await
}
