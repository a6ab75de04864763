use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sampler: SamplerConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Free-memory floor in MB; a tick with less free RAM raises an alert.
    pub threshold_mb: u64,
    pub interval_secs: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            threshold_mb: 1000,
            interval_secs: 5,
        }
    }
}

impl SamplerConfig {
    /// Sampling interval as a `Duration`. A zero interval is rejected
    /// here so a bad config value fails startup instead of panicking the
    /// timer inside the sampler task.
    pub fn interval(&self) -> Result<Duration> {
        if self.interval_secs == 0 {
            return Err(eyre!("interval_secs must be greater than 0"));
        }
        Ok(Duration::from_secs(self.interval_secs))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen: "127.0.0.1:9790".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("healthmon").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
