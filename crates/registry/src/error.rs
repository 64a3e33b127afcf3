use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No registry entry has this display name.
    NotFound { name: String },
    /// Lookup or registration with an empty display name.
    EmptyName,
    /// Two registry entries share a display name.
    DuplicateName { name: String },
    /// An alias points at a name that was never registered.
    UnknownAliasTarget { alias: String, target: String },
    /// A `colors` or `foreground` value is not a 6/8 digit hex color.
    InvalidColor { theme: String, key: String, value: String },
    /// A `fontStyle` contains an unknown flag.
    InvalidFontStyle { theme: String, token: String, value: String },
    /// The same color key appears twice in one theme's static table.
    DuplicateColorKey { theme: String, key: String },
    /// A color key or token selector is empty or whitespace only.
    BlankKey { theme: String, field: &'static str },
    /// A rule sets neither a foreground nor a font style.
    EmptyRule { theme: String, token: String },
    /// A definition failed validation; carries every problem found.
    InvalidTheme { name: String, errors: Vec<ThemeError> },
    /// JSON (de)serialization error.
    Json(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "theme not found: '{name}'"),
            Self::EmptyName => write!(f, "theme name must not be empty"),
            Self::DuplicateName { name } => write!(f, "duplicate theme name: '{name}'"),
            Self::UnknownAliasTarget { alias, target } => {
                write!(f, "alias '{alias}' refers to unknown theme '{target}'")
            }
            Self::InvalidColor { theme, key, value } => {
                write!(f, "theme '{theme}', key '{key}': invalid color '{value}'")
            }
            Self::InvalidFontStyle { theme, token, value } => {
                write!(f, "theme '{theme}', token '{token}': invalid font style '{value}'")
            }
            Self::DuplicateColorKey { theme, key } => {
                write!(f, "theme '{theme}': duplicate color key '{key}'")
            }
            Self::BlankKey { theme, field } => write!(f, "theme '{theme}': blank {field}"),
            Self::EmptyRule { theme, token } => {
                write!(f, "theme '{theme}', token '{token}': rule sets no foreground or font style")
            }
            Self::InvalidTheme { name, errors } => {
                write!(f, "theme '{name}' is invalid ({} problem(s))", errors.len())?;
                if let Some(first) = errors.first() {
                    write!(f, ": {first}")?;
                }
                Ok(())
            }
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
