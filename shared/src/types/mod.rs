//! Core shared types and identifiers

pub mod options;

pub use options::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::SharedError;

static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier used to tag log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// HTTP server serving the form and API
    WebServer,
    /// One-shot command line generator
    Cli,
}

impl ProcessId {
    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the CLI
    pub fn init_cli() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Cli)
    }

    /// Get the global process ID, `Cli` when nothing was initialized
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Cli)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Cli => write!(f, "cli"),
        }
    }
}

/// A categorical field that is either pinned by the user or left for
/// species-based resolution.
///
/// On the wire this is the literal `"auto"` or the option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Auto,
    Fixed(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Auto
    }
}

impl<T: OptionKey> Choice<T> {
    pub const AUTO_KEY: &'static str = "auto";

    /// Return the pinned value, or `auto` when resolution was requested
    pub fn resolve(self, auto: T) -> T {
        match self {
            Choice::Auto => auto,
            Choice::Fixed(value) => value,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Choice::Auto)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Choice::Auto => Self::AUTO_KEY,
            Choice::Fixed(value) => value.key(),
        }
    }
}

impl<T: OptionKey> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice::Fixed(value)
    }
}

impl<T: OptionKey> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl<T: OptionKey> FromStr for Choice<T> {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::AUTO_KEY) {
            Ok(Choice::Auto)
        } else {
            T::from_key(s).map(Choice::Fixed)
        }
    }
}

impl<T: OptionKey> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de, T: OptionKey> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_id_display() {
        assert_eq!(ProcessId::WebServer.to_string(), "webserver");
        assert_eq!(ProcessId::Cli.to_string(), "cli");
    }

    #[test]
    fn test_choice_resolution() {
        let auto: Choice<Medium> = Choice::Auto;
        assert_eq!(auto.resolve(Medium::Wpm), Medium::Wpm);

        let fixed = Choice::Fixed(Medium::B5);
        assert_eq!(fixed.resolve(Medium::Wpm), Medium::B5);
        assert!(!fixed.is_auto());
    }

    #[test]
    fn test_choice_wire_format() {
        let auto: Choice<Explant> = serde_json::from_str("\"auto\"").unwrap();
        assert!(auto.is_auto());

        let fixed: Choice<Explant> = serde_json::from_str("\"shoot_tip\"").unwrap();
        assert_eq!(fixed, Choice::Fixed(Explant::ShootTip));
        assert_eq!(serde_json::to_string(&fixed).unwrap(), "\"shoot_tip\"");

        let unknown = serde_json::from_str::<Choice<Explant>>("\"root_hair\"");
        assert!(unknown.is_err());
    }
}
