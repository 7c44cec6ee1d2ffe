//! Crate-level error types.

use std::fmt;

/// Errors produced by the perch crate.
///
/// The per-frame rig operations are infallible (degenerate input clamps or
/// no-ops); errors only arise from the settings persistence layer.
#[derive(Debug)]
pub enum PerchError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML settings parsing/serialization failure.
    SettingsParse(String),
}

impl fmt::Display for PerchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SettingsParse(msg) => {
                write!(f, "settings parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PerchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::SettingsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for PerchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
