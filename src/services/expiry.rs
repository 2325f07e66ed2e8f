use chrono::Duration;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::commands::poll::CommandDispatcher;
use crate::bot::platform::{MessageSender, UserDirectory};

/// Every minute, on the second.
const SWEEP_SCHEDULE: &str = "0 * * * * *";

/// Closes polls that stayed open longer than the configured timeout.
pub struct PollExpiryService<G> {
    dispatcher: Arc<CommandDispatcher<G>>,
    max_age: Duration,
    scheduler: JobScheduler,
}

impl<G> PollExpiryService<G>
where
    G: MessageSender + UserDirectory + 'static,
{
    pub async fn new(dispatcher: Arc<CommandDispatcher<G>>, max_age: Duration) -> anyhow::Result<Self> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            dispatcher,
            max_age,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> anyhow::Result<()> {
        let dispatcher = self.dispatcher.clone();
        let max_age = self.max_age;

        let sweep_job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _l| {
            let dispatcher = dispatcher.clone();
            Box::pin(async move {
                let closed = dispatcher.expire_stale_polls(max_age).await;
                if closed > 0 {
                    tracing::info!("Expired {} stale poll(s)", closed);
                }
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Poll expiry service started - closing polls older than {} minutes",
            self.max_age.num_minutes()
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> anyhow::Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Runs one sweep immediately.
    pub async fn sweep_now(&self) -> usize {
        self.dispatcher.expire_stale_polls(self.max_age).await
    }
}
