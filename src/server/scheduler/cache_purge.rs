use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{cache::AppCache, error::AppError};

/// Starts the cache purge scheduler.
///
/// Runs every minute and drops expired entries from the in-process store.
/// With redis the job is a no-op since keys expire server-side.
///
/// # Arguments
/// - `cache`: Cache handle shared with the router
pub async fn start_scheduler(cache: AppCache) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let cache = cache.clone();

        Box::pin(async move {
            let removed = cache.purge_expired().await;
            if removed > 0 {
                tracing::debug!("Purged {} expired cache entries", removed);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cache purge scheduler started");

    Ok(scheduler)
}
