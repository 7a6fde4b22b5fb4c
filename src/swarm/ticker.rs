//! Periodic callbacks with explicit cancellation handles.
//!
//! A [`Scheduler`] runs an async task at a fixed period and hands back a
//! [`TickHandle`]. The periodic source stays alive until the handle is
//! cancelled or dropped, whichever happens first.

use futures::future::BoxFuture;
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Async callback fired on every tick
pub type TickFn = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Source of periodic ticks
pub trait Scheduler: Send + Sync {
    /// Run `task` every `period` until the returned handle is released
    fn every(&self, period: Duration, task: TickFn) -> TickHandle;
}

/// Ownership of one periodic tick source
///
/// Cancelling happens exactly once, either through [`TickHandle::cancel`]
/// or when the handle is dropped.
#[derive(Debug)]
pub struct TickHandle {
    token: CancellationToken,
}

impl TickHandle {
    fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Stop the tick source
    pub fn cancel(mut self) {
        self.release();
    }

    /// Whether the source has already been stopped
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    fn release(&mut self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        debug!("Tick source cancelled");
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Ticks driven by the tokio timer
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn every(&self, period: Duration, task: TickFn) -> TickHandle {
        let period = period.max(Duration::from_millis(1));
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            // first tick lands one period after start
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = timer.tick() => task().await,
                }
            }

            debug!("Tick task stopped");
        });

        debug!("Tick task started with period {:?}", period);
        TickHandle::new(token)
    }
}

struct ManualSource {
    token: CancellationToken,
    task: TickFn,
}

/// Deterministic scheduler advanced by hand
///
/// Clones share the same set of sources, so a test can keep one clone
/// while a view owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    sources: Arc<Mutex<Vec<ManualSource>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn sources(&self) -> MutexGuard<'_, Vec<ManualSource>> {
        self.sources.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of sources that have not been cancelled
    pub fn live_sources(&self) -> usize {
        self.sources()
            .iter()
            .filter(|s| !s.token.is_cancelled())
            .count()
    }

    /// Fire every live source `ticks` times
    pub async fn advance(&self, ticks: u32) {
        for _ in 0..ticks {
            let tasks: Vec<TickFn> = {
                let mut sources = self.sources();
                sources.retain(|s| !s.token.is_cancelled());
                sources.iter().map(|s| Arc::clone(&s.task)).collect()
            };

            for task in tasks {
                task().await;
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, _period: Duration, task: TickFn) -> TickHandle {
        let token = CancellationToken::new();
        self.sources().push(ManualSource {
            token: token.clone(),
            task,
        });
        TickHandle::new(token)
    }
}
