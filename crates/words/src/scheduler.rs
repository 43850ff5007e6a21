use super::*;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio::time::MissedTickBehavior;

/// Fixed offsets have no DST, so every period is exactly one day.
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Fires [`WordPool::rotate`] once per scheduled period.
/// Firings never overlap: one that finds another in flight is skipped.
pub struct Scheduler {
    pool: Arc<WordPool>,
    schedule: Schedule,
    busy: Mutex<()>,
}

impl Scheduler {
    pub fn new(pool: Arc<WordPool>, schedule: Schedule) -> Self {
        Self {
            pool,
            schedule,
            busy: Mutex::new(()),
        }
    }
    /// One firing. `None` if skipped because a rotation was already running.
    /// Failures are logged and returned, never raised.
    pub async fn fire(&self) -> Option<Result<String, PoolError>> {
        let Ok(_guard) = self.busy.try_lock() else {
            log::warn!("rotation already in flight, skipping this firing");
            return None;
        };
        let result = self.pool.rotate().await;
        match &result {
            Ok(_) => log::info!("rotated word of the day"),
            Err(e) => log::error!("word rotation failed, current word unchanged: {}", e),
        }
        Some(result)
    }
    /// Fires at `first` and once per day after it, forever.
    /// A tick missed while a rotation ran long is dropped, not replayed.
    pub async fn run(self: Arc<Self>, first: Instant) {
        let mut ticks = tokio::time::interval_at(first, DAY);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            self.fire().await;
            log::info!("next word rotation at {}", self.schedule.next_after(Utc::now()));
        }
    }
    /// Aligns the first firing to the wall clock, then runs on the timer.
    pub fn spawn(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let now = Utc::now();
        log::info!("next word rotation at {}", self.schedule.next_after(now));
        let first = Instant::now() + self.schedule.delay(now);
        tokio::spawn(self.run(first))
    }
}
