//! Configuration system for Glance

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("glance").join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Metrics endpoint serving the JSON snapshot.
    pub url: String,
    /// Refresh cadence in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080/metrics.json".to_string(),
            poll_interval_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "tokyo-night".to_string(),
        }
    }
}

/// Initialize a configuration file with defaults
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration already exists. Use --force to overwrite.");
    }

    Config::default().save(path)?;
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_cadence() {
        let config = Config::default();
        assert_eq!(config.endpoint.poll_interval_ms, 3000);
        assert_eq!(config.endpoint.url, "http://127.0.0.1:8080/metrics.json");
        assert_eq!(config.display.theme, "tokyo-night");
    }

    #[test]
    fn partial_files_fall_back_per_section() {
        let config: Config = toml::from_str(
            r#"
            [endpoint]
            url = "http://box:9000/metrics.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.url, "http://box:9000/metrics.json");
        assert_eq!(config.endpoint.poll_interval_ms, 3000);
        assert_eq!(config.display.theme, "tokyo-night");
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.endpoint.poll_interval_ms = 5000;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.endpoint.poll_interval_ms, 5000);
    }
}
