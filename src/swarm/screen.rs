use chrono::{DateTime, Utc};
use futures::FutureExt;
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::roster::Developer;

use super::session::{SwarmSettings, SwarmViewModel};
use super::ticker::{Scheduler, TickFn, TickHandle};

/// Everything the renderer needs from a swarm screen at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmSnapshot {
    pub active: bool,
    pub remaining_seconds: u32,
    pub remaining: String,
    pub session_seconds: u32,
    pub top_skills: Vec<String>,
    pub developers: Vec<Developer>,
    pub selected: Option<Developer>,
    pub activated_at: Option<DateTime<Utc>>,
}

impl From<&SwarmViewModel> for SwarmSnapshot {
    fn from(model: &SwarmViewModel) -> Self {
        Self {
            active: model.is_active(),
            remaining_seconds: model.remaining_seconds(),
            remaining: model.format_remaining(),
            session_seconds: model.settings().session_seconds,
            top_skills: model.top_skills(),
            developers: model.developers().to_vec(),
            selected: model.selected().cloned(),
            activated_at: model.session().activated_at,
        }
    }
}

/// A mounted hyperlocal swarm view
///
/// Binds a [`SwarmViewModel`] to a [`Scheduler`]. While the swarm is
/// active the screen holds exactly one [`TickHandle`]; deactivating,
/// unmounting or dropping the screen releases it.
pub struct SwarmScreen<S: Scheduler> {
    model: Arc<Mutex<SwarmViewModel>>,
    scheduler: S,
    tick_period: Duration,
    tick: Option<TickHandle>,
}

impl<S: Scheduler> SwarmScreen<S> {
    /// Mount the view over a developer set
    pub fn mount(
        developers: Vec<Developer>,
        settings: SwarmSettings,
        scheduler: S,
        tick_period: Duration,
    ) -> Self {
        info!(
            "Mounting swarm screen with {} developers, session {}s",
            developers.len(),
            settings.session_seconds
        );

        Self {
            model: Arc::new(Mutex::new(SwarmViewModel::new(developers, settings))),
            scheduler,
            tick_period,
            tick: None,
        }
    }

    /// Activate the swarm and start the countdown if it is not running
    pub async fn activate(&mut self) {
        self.model.lock().await.activate();

        if self.tick.is_none() {
            let model = Arc::clone(&self.model);
            let task: TickFn = Arc::new(move || {
                let model = Arc::clone(&model);
                async move {
                    model.lock().await.tick();
                }
                .boxed()
            });
            self.tick = Some(self.scheduler.every(self.tick_period, task));
        }
    }

    /// Deactivate the swarm and stop the countdown
    pub async fn deactivate(&mut self) {
        if !self.model.lock().await.deactivate() {
            return;
        }

        if let Some(handle) = self.tick.take() {
            handle.cancel();
        }
    }

    /// Focus a developer; `false` when the id is not in the set
    pub async fn select(&self, dev_id: &str) -> bool {
        self.model.lock().await.select(dev_id)
    }

    /// Close the developer detail view
    pub async fn dismiss(&self) {
        self.model.lock().await.dismiss();
    }

    pub async fn is_active(&self) -> bool {
        self.model.lock().await.is_active()
    }

    /// Whether a countdown source is currently held
    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    /// Copy out the current state and derived values
    pub async fn snapshot(&self) -> SwarmSnapshot {
        let model = self.model.lock().await;
        SwarmSnapshot::from(&*model)
    }

    /// Tear the view down, releasing the countdown
    pub fn unmount(mut self) {
        if let Some(handle) = self.tick.take() {
            handle.cancel();
        }
        debug!("Swarm screen unmounted");
    }
}
