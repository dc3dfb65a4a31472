use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    pub ui_fps: u32,

    #[serde(default = "default_progress_refresh_ms")]
    pub progress_refresh_ms: u64,
}

fn default_progress_refresh_ms() -> u64 {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "mocha".to_string(),
            ui_fps: 60,
            progress_refresh_ms: default_progress_refresh_ms(),
        }
    }
}

impl Config {
    pub fn load_or_default() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            let config = Self::default();
            let _ = config.save();
            return Ok(config);
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw).unwrap_or_default())
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::default_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let raw = toml::to_string_pretty(self).unwrap_or_default();
        fs::write(path, raw)?;
        Ok(())
    }

    fn default_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", "playdeck")?;
        Some(dirs.config_dir().join("config.toml"))
    }
}
