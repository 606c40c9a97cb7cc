//! `GlobalOpts`-aware wrappers over `pronet_config`.
//!
//! The config file supplies defaults; flags on the command line win.

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;
use tracing::debug;

use pronet_core::{FileFlagStore, FlagStore, MemoryFlagStore};

pub use pronet_config::{Config, config_path};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Load the config file and fill unset output/color flags from it.
pub fn load(global: &mut GlobalOpts) -> Result<Config, CliError> {
    let cfg = pronet_config::load_config()?;
    apply_defaults(global, &cfg);
    Ok(cfg)
}

fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.defaults.color, true).ok();
    }
}

/// Where flags persist for this run, or `None` when `--ephemeral`.
pub fn state_path(global: &GlobalOpts, cfg: &Config) -> Option<PathBuf> {
    if global.ephemeral {
        return None;
    }
    Some(global.state_file.clone().unwrap_or_else(|| cfg.state_path()))
}

/// Open the flag store for this run. A corrupt state file is an error
/// here rather than silently reading as "not onboarded".
pub fn open_store(global: &GlobalOpts, cfg: &Config) -> Result<Arc<dyn FlagStore>, CliError> {
    match state_path(global, cfg) {
        Some(path) => {
            debug!(path = %path.display(), "opening flag store");
            Ok(Arc::new(FileFlagStore::try_open(path)?))
        }
        None => Ok(Arc::new(MemoryFlagStore::new())),
    }
}
