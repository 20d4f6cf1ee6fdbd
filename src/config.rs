use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::engine::coach::DEFAULT_COACHES;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_splash_secs")]
    pub splash_secs: f64,
    #[serde(default = "default_level_up_secs")]
    pub level_up_secs: f64,
    #[serde(default = "default_exit_secs")]
    pub exit_secs: f64,
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default = "default_true")]
    pub stopwatch: bool,
    #[serde(default = "default_true")]
    pub cowsay: bool,
    #[serde(default = "default_coaches")]
    pub coaches: Vec<String>,
}

fn default_theme() -> String {
    "bubblegum".to_string()
}
fn default_splash_secs() -> f64 {
    3.0
}
fn default_level_up_secs() -> f64 {
    2.0
}
fn default_exit_secs() -> f64 {
    3.0
}
fn default_true() -> bool {
    true
}
fn default_coaches() -> Vec<String> {
    DEFAULT_COACHES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: None,
            theme: default_theme(),
            splash_secs: default_splash_secs(),
            level_up_secs: default_level_up_secs(),
            exit_secs: default_exit_secs(),
            sound: default_true(),
            stopwatch: default_true(),
            cowsay: default_true(),
            coaches: default_coaches(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mathbuddy")
            .join("config.toml")
    }

    pub fn splash_delay(&self) -> Duration {
        secs(self.splash_secs)
    }

    pub fn level_up_delay(&self) -> Duration {
        secs(self.level_up_secs)
    }

    pub fn exit_delay(&self) -> Duration {
        secs(self.exit_secs)
    }
}

/// Negative or non-finite values from a hand-edited file count as zero.
fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}
