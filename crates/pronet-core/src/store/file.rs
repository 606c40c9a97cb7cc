// ── TOML-backed flag store ──
//
// Flags live in a flat TOML table, rewritten in full on every set. A
// missing file is an empty store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use tracing::{debug, warn};

use super::FlagStore;
use crate::error::CoreError;

#[derive(Debug)]
pub struct FileFlagStore {
    path: PathBuf,
    flags: DashMap<String, bool>,
}

impl FileFlagStore {
    /// Open the store, failing if the file exists but cannot be parsed.
    pub fn try_open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let flags = DashMap::new();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let parsed: BTreeMap<String, bool> =
                    toml::from_str(&contents).map_err(|e| CoreError::CorruptStore {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                for (k, v) in parsed {
                    flags.insert(k, v);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no flag file yet");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self { path, flags })
    }

    /// Open the store, treating an unreadable file as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::try_open(path.clone()).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "ignoring unreadable flag file");
            Self {
                path,
                flags: DashMap::new(),
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), CoreError> {
        let ordered: BTreeMap<String, bool> = self
            .flags
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&ordered)?)?;
        Ok(())
    }
}

impl FlagStore for FileFlagStore {
    fn get_bool(&self, key: &str) -> bool {
        self.flags.get(key).is_some_and(|v| *v)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), CoreError> {
        self.flags.insert(key.to_owned(), value);
        self.write().map_err(|e| CoreError::Persistence {
            key: key.to_owned(),
            reason: e.to_string(),
        })
    }
}
