use std::fmt;

use edtheme_registry::ThemeError;

#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read or written.
    Io(String),
    /// Settings file is not valid JSON for [`crate::Settings`].
    Parse(String),
    /// Theme lookup failed.
    Theme(ThemeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "settings parse error: {msg}"),
            Self::Theme(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Theme(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ThemeError> for ConfigError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}
