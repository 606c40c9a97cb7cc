// ── Runtime configuration ──
//
// These types describe how the core behaves for one session. They never
// touch disk: the config crate (or a test) builds a `CoreConfig` and
// hands it in.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What happens to a card once it has been swiped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionPolicy {
    /// Swiped cards go to the back of the deck; the deck never runs out.
    #[default]
    Circular,
    /// Swiped cards are dropped; the deck shrinks until empty.
    Linear,
}

impl ConsumptionPolicy {
    pub fn from_circular(circular: bool) -> Self {
        if circular { Self::Circular } else { Self::Linear }
    }

    pub fn is_circular(self) -> bool {
        matches!(self, Self::Circular)
    }
}

/// Free swipes allowed per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyLimit {
    #[default]
    Unlimited,
    LimitOf(NonZeroU32),
}

impl DailyLimit {
    /// Build from a raw count where `0` (or none) means unlimited.
    pub fn from_count(count: Option<u32>) -> Self {
        count
            .and_then(NonZeroU32::new)
            .map_or(Self::Unlimited, Self::LimitOf)
    }

    pub fn get(self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::LimitOf(n) => Some(n.get()),
        }
    }
}

impl fmt::Display for DailyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::LimitOf(n) => write!(f, "{n}/day"),
        }
    }
}

/// Immutable settings for one deck controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    pub consumption: ConsumptionPolicy,
    pub daily_limit: DailyLimit,
}

impl DeckConfig {
    pub fn circular() -> Self {
        Self {
            consumption: ConsumptionPolicy::Circular,
            daily_limit: DailyLimit::Unlimited,
        }
    }

    pub fn linear() -> Self {
        Self {
            consumption: ConsumptionPolicy::Linear,
            daily_limit: DailyLimit::Unlimited,
        }
    }

    #[must_use]
    pub fn with_daily_limit(mut self, limit: DailyLimit) -> Self {
        self.daily_limit = limit;
        self
    }
}

/// Artificial delay applied by every mock collaborator before it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency(pub Duration);

impl MockLatency {
    pub const NONE: Self = Self(Duration::ZERO);

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn duration(self) -> Duration {
        self.0
    }

    /// Sleep for the configured latency. Zero latency still yields once.
    pub async fn wait(self) {
        if self.0.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self::from_millis(200)
    }
}

/// Everything the composition root needs to assemble a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreConfig {
    pub deck: DeckConfig,
    pub latency: MockLatency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_means_unlimited() {
        assert_eq!(DailyLimit::from_count(Some(0)), DailyLimit::Unlimited);
        assert_eq!(DailyLimit::from_count(None), DailyLimit::Unlimited);
        assert_eq!(DailyLimit::from_count(Some(5)).get(), Some(5));
    }

    #[test]
    fn consumption_from_bool() {
        assert!(ConsumptionPolicy::from_circular(true).is_circular());
        assert_eq!(ConsumptionPolicy::from_circular(false), ConsumptionPolicy::Linear);
    }
}
