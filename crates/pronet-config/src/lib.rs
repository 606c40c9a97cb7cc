//! Shared configuration for the pronet CLI.
//!
//! A single TOML file layered under `PRONET_` environment variables,
//! platform path resolution for the config and flag-state files, and
//! translation to `pronet_core::CoreConfig`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pronet_core::{ConsumptionPolicy, CoreConfig, DailyLimit, DeckConfig, MockLatency};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Config {
    /// Output and color defaults for the CLI.
    #[serde(default)]
    pub defaults: Defaults,

    /// Deck consumption and quota.
    #[serde(default)]
    pub discovery: DiscoverySection,

    /// Simulated collaborator latency.
    #[serde(default)]
    pub mock: MockSection,

    /// Where the persisted flow flags live.
    #[serde(default)]
    pub state: StateSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscoverySection {
    /// Swiped cards go to the back of the deck instead of being dropped.
    #[serde(default = "default_circular")]
    pub circular: bool,

    /// Free swipes per day. Omitted or 0 means unlimited.
    pub daily_free_limit: Option<u32>,
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self {
            circular: default_circular(),
            daily_free_limit: None,
        }
    }
}

fn default_circular() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MockSection {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for MockSection {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_latency_ms() -> u64 {
    200
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct StateSection {
    /// Override for the flag-state file.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Translate into the core's deck and latency settings.
    pub fn to_core_config(&self) -> CoreConfig {
        CoreConfig {
            deck: DeckConfig {
                consumption: ConsumptionPolicy::from_circular(self.discovery.circular),
                daily_limit: DailyLimit::from_count(self.discovery.daily_free_limit),
            },
            latency: MockLatency::from_millis(self.mock.latency_ms),
        }
    }

    /// The configured state file, or the platform default.
    pub fn state_path(&self) -> PathBuf {
        self.state.path.clone().unwrap_or_else(default_state_path)
    }

    /// Reject values the CLI cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const OUTPUTS: [&str; 5] = ["table", "json", "json-compact", "yaml", "plain"];
        const COLORS: [&str; 3] = ["auto", "always", "never"];

        if !OUTPUTS.contains(&self.defaults.output.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.output".into(),
                reason: format!("expected one of {}, got '{}'", OUTPUTS.join(", "), self.defaults.output),
            });
        }
        if !COLORS.contains(&self.defaults.color.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.color".into(),
                reason: format!("expected one of {}, got '{}'", COLORS.join(", "), self.defaults.color),
            });
        }
        Ok(())
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "pronet", "pronet")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default location of the persisted flow flags.
pub fn default_state_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback(".local/share").join("state.toml"),
        |dirs| dirs.data_dir().join("state.toml"),
    )
}

fn dirs_fallback(base: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(base);
    p.push("pronet");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` (missing file is fine) with `PRONET_` env overrides.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PRONET_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// Load config, returning a default if anything goes wrong.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
