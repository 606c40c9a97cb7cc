// ── Record identity ──
//
// Every record the UI lists (cards, conversations, messages,
// notifications, profiles) carries an opaque id. Fixtures mint fresh
// UUIDs; ids parsed back from user input may be arbitrary strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a displayed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Uuid(Uuid),
    Named(String),
}

impl RecordId {
    /// Mint a fresh random id.
    pub fn new() -> Self {
        Self::Uuid(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            Self::Named(_) => None,
        }
    }

    /// First eight characters, enough to tell records apart in a table.
    pub fn short(&self) -> String {
        self.to_string().chars().take(8).collect()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Named(s) => f.write_str(s),
        }
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<Uuid> for RecordId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        match Uuid::parse_str(s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Named(s.to_owned()),
        }
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Named(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uuid_strings() {
        let u = Uuid::new_v4();
        assert_eq!(RecordId::from(u.to_string()), RecordId::Uuid(u));
        assert_eq!(RecordId::from("herman"), RecordId::Named("herman".into()));
    }

    #[test]
    fn short_is_prefix() {
        let id = RecordId::from("abcdefghijkl");
        assert_eq!(id.short(), "abcdefgh");
    }
}
