//! Background eviction of idle sessions.

use std::time::Duration as StdDuration;

use time::{Duration, OffsetDateTime};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::services::SessionService;

/// Spawn a task that sweeps idle sessions every `interval`.
///
/// The task runs until aborted through the returned handle.
pub fn spawn_session_sweeper(
    sessions: SessionService,
    interval: StdDuration,
    ttl: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; nothing can be idle yet.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let evicted = sessions.sweep_idle(OffsetDateTime::now_utc(), ttl);
            if evicted > 0 {
                info!(evicted, remaining = sessions.session_count(), "swept idle sessions");
            } else {
                debug!("session sweep found nothing to evict");
            }
        }
    })
}
