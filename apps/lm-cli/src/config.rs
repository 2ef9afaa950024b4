// config.rs — lifemeter configuration.
//
// Loaded from a TOML file; every key has a serde default, so an absent file
// or a partial file both work. Only a malformed file is an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lm_goal::DEFAULT_NOTICE_SECS;
use lm_lifespan::{DisplayStyle, TimeUnit};
use serde::{Deserialize, Serialize};

/// Top-level configuration from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifemeterConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub goals: GoalsConfig,

    #[serde(default)]
    pub alive: AliveConfig,
}

/// How estimates are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit selected when a session starts.
    #[serde(default)]
    pub time_unit: TimeUnit,

    /// Glyph set for the visualization.
    #[serde(default)]
    pub style: DisplayStyle,

    /// Glyphs per rendered line. 0 puts them all on one line.
    #[serde(default = "default_glyphs_per_row")]
    pub glyphs_per_row: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_unit: TimeUnit::default(),
            style: DisplayStyle::default(),
            glyphs_per_row: default_glyphs_per_row(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Seconds the "goal added" notice stays up.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            notice_secs: default_notice_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliveConfig {
    /// Pause before the `alive` check answers.
    #[serde(default = "default_alive_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AliveConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_alive_delay_ms(),
        }
    }
}

fn default_glyphs_per_row() -> usize {
    20
}

fn default_notice_secs() -> u64 {
    DEFAULT_NOTICE_SECS
}

fn default_alive_delay_ms() -> u64 {
    2_000
}

impl LifemeterConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse a config file, falling back to defaults when it doesn't exist.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `<platform config dir>/lifemeter/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lifemeter").join("config.toml"))
    }

    /// Load from `explicit` if given, otherwise from the default location.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load_or_default(&path),
                None => Ok(Self::default()),
            },
        }
    }
}
