use crate::colors::FireColor;
use crate::config::{Direction, FireConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub fire: FireSettings,
}

/// `[fire]` table; every field optional, CLI flags win
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FireSettings {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub decay: Option<u32>,
    pub direction: Option<Direction>,
    pub color: Option<FireColor>,
    pub time: Option<f32>,
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring invalid settings file");
                Self::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read settings file");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("doomfire")
            .join("config.toml")
    }

    /// Override config defaults with values from the file
    pub fn apply(&self, config: &mut FireConfig) {
        let fire = &self.fire;
        if fire.width.is_some() {
            config.width = fire.width;
        }
        if fire.height.is_some() {
            config.height = fire.height;
        }
        if let Some(decay) = fire.decay {
            config.decay = decay;
        }
        if let Some(direction) = fire.direction {
            config.direction = direction;
        }
        if let Some(color) = fire.color {
            config.color = color;
        }
        if let Some(time) = fire.time {
            config.time_step = time;
        }
    }
}
