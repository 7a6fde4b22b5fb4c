use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::context::UserContext;
use crate::core::error::DevOrbitError;

/// Top-level configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Hyperlocal swarm configuration
    pub swarm: SwarmConfig,

    /// Current user, passed to the navigation shell
    pub user: UserConfig,

    /// Developer data configuration
    pub data: DataConfig,
}

/// Hyperlocal swarm configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SwarmConfig {
    /// Length of a swarm session in seconds
    #[serde(default = "default_session_seconds")]
    pub session_seconds: u32,

    /// Interval between countdown ticks in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Number of skills shown in the swarm summary
    #[serde(default = "default_top_skill_limit")]
    pub top_skill_limit: usize,

    /// Number of decorative particles on the idle screen
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
}

/// Current user configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct UserConfig {
    /// DevOrbit id of the signed-in developer, if one has been created
    pub dev_id: Option<String>,
}

/// Developer data configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DataConfig {
    /// JSON file holding the nearby developer set; seed data is used when unset
    pub path: Option<String>,
}

// Default values for optional configuration
fn default_session_seconds() -> u32 {
    30 * 60
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_top_skill_limit() -> usize {
    6
}

fn default_particle_count() -> usize {
    20
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            session_seconds: default_session_seconds(),
            tick_interval_ms: default_tick_interval_ms(),
            top_skill_limit: default_top_skill_limit(),
            particle_count: default_particle_count(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file layered under
    /// `DEVORBIT_*` environment variables (`__` separates sections).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(true),
            );
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("DEVORBIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {:?}", path))?;

        let config: Config = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the swarm cannot run with
    pub fn validate(&self) -> Result<(), DevOrbitError> {
        if self.swarm.tick_interval_ms == 0 {
            return Err(DevOrbitError::ConfigError(
                "swarm.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The read-only user context handed to the navigation shell
    pub fn user_context(&self) -> UserContext {
        UserContext::new(self.user.dev_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.swarm.session_seconds, 1800);
        assert_eq!(config.swarm.tick_interval_ms, 1000);
        assert_eq!(config.swarm.top_skill_limit, 6);
        assert_eq!(config.swarm.particle_count, 20);
        assert!(config.user.dev_id.is_none());
        assert!(config.data.path.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[swarm]
session_seconds = 90
tick_interval_ms = 10

[user]
dev_id = "orbit-42"
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.swarm.session_seconds, 90);
        assert_eq!(config.swarm.tick_interval_ms, 10);
        assert_eq!(config.swarm.top_skill_limit, 6);
        assert_eq!(config.user_context().dev_id(), Some("orbit-42"));
    }

    #[test]
    fn test_load_layers_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[swarm]\ntop_skill_limit = 3\n\n[data]\npath = \"devs.json\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.swarm.top_skill_limit, 3);
        assert_eq!(config.swarm.session_seconds, 1800);
        assert_eq!(config.data.path.as_deref(), Some("devs.json"));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[swarm]\ntick_interval_ms = 0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("tick_interval_ms"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/devorbit.toml")));
        assert!(result.is_err());
    }
}
