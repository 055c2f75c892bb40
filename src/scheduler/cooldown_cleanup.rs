use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::roll::RollService};

/// Starts the periodic cooldown cleanup scheduler
///
/// Each run purges expired and malformed entries from the cooldown ledger. The purge
/// takes the roll lock, so it never interleaves with a roll in progress.
///
/// # Arguments
/// - `roll`: Roll service owning the cooldown ledger
/// - `schedule`: Six-field cron expression
pub async fn start_scheduler(roll: RollService, schedule: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let roll = roll.clone();

        Box::pin(async move {
            match roll.garbage_collect().await {
                Ok(report) => tracing::debug!(
                    "Scheduled cooldown cleanup removed {} entries",
                    report.removed()
                ),
                Err(e) => tracing::error!("Error cleaning up cooldowns: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cooldown cleanup scheduler started ({})", schedule);

    Ok(())
}
