use dashmap::DashMap;

use super::FlagStore;
use crate::error::CoreError;

/// Process-local flag store. Used by tests and `--ephemeral` sessions.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: DashMap<String, bool>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed flags, e.g. to start a session already onboarded.
    #[must_use]
    pub fn with(self, key: &str, value: bool) -> Self {
        self.flags.insert(key.to_owned(), value);
        self
    }
}

impl FlagStore for MemoryFlagStore {
    fn get_bool(&self, key: &str) -> bool {
        self.flags.get(key).is_some_and(|v| *v)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), CoreError> {
        self.flags.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_false() {
        let store = MemoryFlagStore::new();
        assert!(!store.get_bool("nope"));
    }

    #[test]
    fn seeded_values_read_back() {
        let store = MemoryFlagStore::new().with("a", true);
        assert!(store.get_bool("a"));
        store.set_bool("a", false).ok();
        assert!(!store.get_bool("a"));
    }
}
