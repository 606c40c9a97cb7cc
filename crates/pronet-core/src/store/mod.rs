// ── Flag persistence ──
//
// The only state that outlives a session: two booleans under stable keys.
// `AppState` writes through on every change; stores never batch.

mod file;
mod memory;

pub use file::FileFlagStore;
pub use memory::MemoryFlagStore;

use crate::error::CoreError;

/// Stable keys for the persisted flow flags.
pub mod keys {
    pub const HAS_COMPLETED_ONBOARDING: &str = "hasCompletedOnboarding";
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
}

/// A boolean key-value store. Missing keys read as `false`.
pub trait FlagStore: Send + Sync {
    fn get_bool(&self, key: &str) -> bool;

    fn set_bool(&self, key: &str, value: bool) -> Result<(), CoreError>;
}
