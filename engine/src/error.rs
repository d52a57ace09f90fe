//! Error types
//!
//! Only configuration loading can fail. Everything that happens inside a frame
//! (empty probes, stale selections) is handled in place and logged.

/// Errors that can occur while loading or validating a [`PlayerConfig`].
///
/// [`PlayerConfig`]: crate::player::PlayerConfig
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error while reading the config file.
    Io(std::io::Error),
    /// JSON deserialization error.
    Parse(serde_json::Error),
    /// A field holds a value the controller cannot integrate with.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
