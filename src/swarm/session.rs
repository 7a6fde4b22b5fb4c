//! Hyperlocal swarm view model.
//!
//! Owns the activation flag, the session countdown and the focused
//! developer. Scheduling the countdown is left to the owner (see
//! [`crate::swarm::screen::SwarmScreen`]); this type only reacts to
//! `tick` calls.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;

use crate::core::config::SwarmConfig;
use crate::roster::Developer;

use super::skills;

/// Default swarm session length in seconds
pub const SESSION_SECONDS: u32 = 30 * 60;

/// Default number of skills in the swarm summary
pub const TOP_SKILL_LIMIT: usize = 6;

/// Swarm tuning taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwarmSettings {
    pub session_seconds: u32,
    pub top_skill_limit: usize,
}

impl Default for SwarmSettings {
    fn default() -> Self {
        Self {
            session_seconds: SESSION_SECONDS,
            top_skill_limit: TOP_SKILL_LIMIT,
        }
    }
}

impl From<&SwarmConfig> for SwarmSettings {
    fn from(config: &SwarmConfig) -> Self {
        Self {
            session_seconds: config.session_seconds,
            top_skill_limit: config.top_skill_limit,
        }
    }
}

/// Per-mount session state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmSession {
    /// Whether the swarm overlay is shown
    pub active: bool,

    /// Seconds left in the session
    pub remaining_seconds: u32,

    /// Id of the developer shown in the detail view
    pub selected: Option<String>,

    /// When the session was last activated
    pub activated_at: Option<DateTime<Utc>>,
}

impl SwarmSession {
    pub fn new(session_seconds: u32) -> Self {
        Self {
            active: false,
            remaining_seconds: session_seconds,
            selected: None,
            activated_at: None,
        }
    }
}

/// State and derived values of the hyperlocal swarm screen
#[derive(Debug, Clone)]
pub struct SwarmViewModel {
    developers: Vec<Developer>,
    session: SwarmSession,
    settings: SwarmSettings,
}

impl SwarmViewModel {
    /// Create a view model over an immutable developer set
    pub fn new(developers: Vec<Developer>, settings: SwarmSettings) -> Self {
        Self {
            developers,
            session: SwarmSession::new(settings.session_seconds),
            settings,
        }
    }

    /// Show the swarm overlay. Returns `true` if this call changed state.
    pub fn activate(&mut self) -> bool {
        if self.session.active {
            debug!("Swarm already active");
            return false;
        }

        self.session.active = true;
        self.session.activated_at = Some(Utc::now());
        info!(
            "Swarm activated with {} remaining",
            self.format_remaining()
        );
        true
    }

    /// Hide the swarm overlay. The countdown keeps its value.
    pub fn deactivate(&mut self) -> bool {
        if !self.session.active {
            return false;
        }

        self.session.active = false;
        info!(
            "Swarm deactivated with {} remaining",
            self.format_remaining()
        );
        true
    }

    /// Advance the countdown by one second, stopping at zero.
    ///
    /// Ignored while inactive.
    pub fn tick(&mut self) {
        if !self.session.active {
            return;
        }

        self.session.remaining_seconds = self.session.remaining_seconds.saturating_sub(1);
        debug!("Swarm tick: {}", self.format_remaining());
    }

    /// Focus a developer by id. Unknown ids leave the state untouched
    /// and return `false`.
    pub fn select(&mut self, dev_id: &str) -> bool {
        if self.developers.iter().any(|d| d.id == dev_id) {
            self.session.selected = Some(dev_id.to_string());
            debug!("Selected developer {}", dev_id);
            true
        } else {
            warn!("Ignoring selection of unknown developer id '{}'", dev_id);
            false
        }
    }

    /// Clear the focused developer
    pub fn dismiss(&mut self) {
        self.session.selected = None;
    }

    /// Remaining session time as `M:SS`
    pub fn format_remaining(&self) -> String {
        format_clock(self.session.remaining_seconds)
    }

    /// Most common skills across the developer set
    pub fn top_skills(&self) -> Vec<String> {
        skills::top_skills(&self.developers, self.settings.top_skill_limit)
    }

    pub fn is_active(&self) -> bool {
        self.session.active
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds
    }

    /// The focused developer, looked up by id
    pub fn selected(&self) -> Option<&Developer> {
        let id = self.session.selected.as_deref()?;
        self.developers.iter().find(|d| d.id == id)
    }

    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    pub fn session(&self) -> &SwarmSession {
        &self.session
    }

    pub fn settings(&self) -> SwarmSettings {
        self.settings
    }
}

/// Render seconds as `M:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
