//! Engine configuration.
//!
//! Values come from the environment at process start; everything has a default.

use core::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key} (expected one of: {expected})")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Line terminator used when rendering text snapshots.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    /// Windows edit controls need `\r\n`.
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            _ => Err(ConfigError::Invalid {
                key: EngineConfig::LINE_ENDING_VAR,
                value: s.to_string(),
                expected: "lf, crlf",
            }),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub line_ending: LineEnding,
}

impl EngineConfig {
    pub const LINE_ENDING_VAR: &'static str = "WAREHOUSE_LINE_ENDING";

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup (env, tests, files).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let line_ending = match lookup(Self::LINE_ENDING_VAR) {
            Some(raw) => raw.parse()?,
            None => LineEnding::default(),
        };
        Ok(Self { line_ending })
    }
}
