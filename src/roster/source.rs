use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;

use crate::core::config::DataConfig;
use crate::core::error::DevOrbitError;

use super::models::{validate_roster, Developer};
use super::seed;

/// Supplier of the immutable developer set for a view
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperSource: Send + Sync {
    /// Fetch the developer records
    async fn load(&self) -> Result<Vec<Developer>>;

    /// Human-readable origin, for logging
    fn describe(&self) -> String;
}

/// Built-in sample data
#[derive(Debug, Default, Clone)]
pub struct SeedSource;

#[async_trait]
impl DeveloperSource for SeedSource {
    async fn load(&self) -> Result<Vec<Developer>> {
        Ok(seed::nearby_developers())
    }

    fn describe(&self) -> String {
        "built-in seed data".to_string()
    }
}

/// A JSON array of developer records on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DeveloperSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Developer>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(DevOrbitError::from)
            .with_context(|| format!("Failed to read developer file: {:?}", self.path))?;

        let developers: Vec<Developer> = serde_json::from_str(&text)
            .map_err(DevOrbitError::from)
            .with_context(|| format!("Failed to parse developer file: {:?}", self.path))?;

        Ok(developers)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the data source named by the configuration
pub fn source_from_config(config: &DataConfig) -> Box<dyn DeveloperSource> {
    match &config.path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource),
    }
}

/// Load and validate the developer set from a source
pub async fn load_roster(source: &dyn DeveloperSource) -> Result<Vec<Developer>> {
    debug!("Loading developers from {}", source.describe());

    let developers = source.load().await?;
    validate_roster(&developers)
        .with_context(|| format!("Invalid developer data from {}", source.describe()))?;

    info!(
        "Loaded {} developers from {}",
        developers.len(),
        source.describe()
    );
    Ok(developers)
}
