use crate::error::{ConfigError, ConfigResult};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering policy used when building a tree from text input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderPolicy {
    /// Compare the string form of each value
    #[default]
    Lexicographic,
    /// Numeric ascending
    Numbers,
    /// Numeric descending
    NumbersReversed,
    /// String ascending
    Strings,
    /// String descending
    StringsReversed,
}

impl OrderPolicy {
    pub const ALL: [OrderPolicy; 5] = [
        OrderPolicy::Lexicographic,
        OrderPolicy::Numbers,
        OrderPolicy::NumbersReversed,
        OrderPolicy::Strings,
        OrderPolicy::StringsReversed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OrderPolicy::Lexicographic => "lexicographic",
            OrderPolicy::Numbers => "numbers",
            OrderPolicy::NumbersReversed => "numbers-reversed",
            OrderPolicy::Strings => "strings",
            OrderPolicy::StringsReversed => "strings-reversed",
        }
    }

    /// Whether values must be parsed as numbers under this policy
    pub fn is_numeric(&self) -> bool {
        matches!(self, OrderPolicy::Numbers | OrderPolicy::NumbersReversed)
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| ConfigError::Validation(format!("Unknown order policy: {}", s)))
    }
}

/// Tree behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSettings {
    /// Ordering policy
    pub order: OrderPolicy,
    /// Check red-black invariants after every mutation
    pub validate_after_each: bool,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            order: OrderPolicy::default(),
            validate_after_each: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level written to the terminal
    pub level: LevelFilter,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
        }
    }
}
