// Token (syntax scope) styling rules

use crate::color::HexColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Font style flags for a token rule.
///
/// Parsed from the space-separated form the editor expects
/// (`"italic"`, `"bold underline"`). An empty string is a valid value that
/// explicitly clears styling, so it round-trips as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl FontStyle {
    pub const NONE: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
        strikethrough: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Parse a space-separated flag list. Unknown words fail.
    pub fn parse(value: &str) -> Option<Self> {
        let mut style = Self::NONE;
        for word in value.split_whitespace() {
            match word {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                "strikethrough" => style.strikethrough = true,
                _ => return None,
            }
        }
        Some(style)
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.italic, "italic"),
            (self.bold, "bold"),
            (self.underline, "underline"),
            (self.strikethrough, "strikethrough"),
        ];
        let words: Vec<&str> = flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, word)| *word)
            .collect();
        f.write_str(&words.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFontStyle(pub String);

impl fmt::Display for InvalidFontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid font style '{}' (expected bold, italic, underline, strikethrough)",
            self.0
        )
    }
}

impl std::error::Error for InvalidFontStyle {}

impl FromStr for FontStyle {
    type Err = InvalidFontStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidFontStyle(s.to_string()))
    }
}

impl TryFrom<String> for FontStyle {
    type Error = InvalidFontStyle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontStyle> for String {
    fn from(style: FontStyle) -> Self {
        style.to_string()
    }
}

/// One syntax-highlighting rule.
///
/// `token` is kept verbatim (compound selectors and stray whitespace
/// included); how it matches source scopes is up to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyle {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

impl TokenStyle {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            foreground: None,
            font_style: None,
        }
    }

    pub fn foreground(mut self, color: HexColor) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Scope selectors of a compound token (`"a | b"` or `"a, b"`).
    /// Space-separated descendant selectors stay together.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.token
            .split(|c| c == '|' || c == ',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
