//! Built-in themes.
//!
//! Theme data lives in static tables of string literals, one module per
//! theme. Tables are turned into typed [`ThemeDefinition`]s when the registry
//! is built, which is where malformed colors or font styles surface.

mod dracula;
mod emerald;
mod greenery;
mod nightowl;
mod onedark;
mod winter;

use crate::color::HexColor;
use crate::error::ThemeError;
use crate::theme::{BaseTheme, ThemeDefinition};
use crate::token::{FontStyle, TokenStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Static theme table
pub(crate) struct ThemeSource {
    pub inherit: bool,
    pub base: BaseTheme,
    pub colors: &'static [(&'static str, &'static str)],
    pub rules: &'static [RuleSource],
}

/// Static token rule
pub(crate) struct RuleSource {
    pub token: &'static str,
    pub foreground: Option<&'static str>,
    pub font_style: Option<&'static str>,
}

pub(crate) const fn fg(token: &'static str, foreground: &'static str) -> RuleSource {
    RuleSource { token, foreground: Some(foreground), font_style: None }
}

pub(crate) const fn style(token: &'static str, font_style: &'static str) -> RuleSource {
    RuleSource { token, foreground: None, font_style: Some(font_style) }
}

pub(crate) const fn styled(
    token: &'static str,
    foreground: &'static str,
    font_style: &'static str,
) -> RuleSource {
    RuleSource { token, foreground: Some(foreground), font_style: Some(font_style) }
}

impl ThemeSource {
    /// Build the typed definition, collecting every defect in the table.
    pub(crate) fn to_definition(&self, name: &str) -> Result<ThemeDefinition, Vec<ThemeError>> {
        let mut errors = Vec::new();

        let mut colors = BTreeMap::new();
        for &(key, value) in self.colors {
            match HexColor::parse(value) {
                Some(color) => {
                    if colors.insert(key.to_string(), color).is_some() {
                        errors.push(ThemeError::DuplicateColorKey {
                            theme: name.to_string(),
                            key: key.to_string(),
                        });
                    }
                }
                None => errors.push(ThemeError::InvalidColor {
                    theme: name.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                }),
            }
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            let mut token_style = TokenStyle::new(rule.token);
            if let Some(value) = rule.foreground {
                match HexColor::parse(value) {
                    Some(color) => token_style.foreground = Some(color),
                    None => errors.push(ThemeError::InvalidColor {
                        theme: name.to_string(),
                        key: rule.token.to_string(),
                        value: value.to_string(),
                    }),
                }
            }
            if let Some(value) = rule.font_style {
                match FontStyle::parse(value) {
                    Some(font_style) => token_style.font_style = Some(font_style),
                    None => errors.push(ThemeError::InvalidFontStyle {
                        theme: name.to_string(),
                        token: rule.token.to_string(),
                        value: value.to_string(),
                    }),
                }
            }
            rules.push(token_style);
        }

        let definition = ThemeDefinition {
            inherit: self.inherit,
            base: self.base,
            colors,
            rules,
            encoded_tokens_colors: Vec::new(),
        };
        errors.extend(definition.validate(name));

        if errors.is_empty() {
            Ok(definition)
        } else {
            Err(errors)
        }
    }
}

/// Built-in theme display names, in the order they are offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    OneDarkPro,
    Dracula,
    Night,
    Dark,
    Emerald,
    Forest,
    Winter,
}

impl ThemeId {
    pub const ALL: &'static [ThemeId] = &[
        ThemeId::OneDarkPro,
        ThemeId::Dracula,
        ThemeId::Night,
        ThemeId::Dark,
        ThemeId::Emerald,
        ThemeId::Forest,
        ThemeId::Winter,
    ];

    /// Baseline used by callers when a stored preference no longer resolves
    pub const DEFAULT: ThemeId = ThemeId::Dark;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDarkPro => "onedarkpro",
            Self::Dracula => "dracula",
            Self::Night => "night",
            Self::Dark => "dark",
            Self::Emerald => "emerald",
            Self::Forest => "forest",
            Self::Winter => "winter",
        }
    }

    /// Display name this id shares its full definition with, if any
    pub fn alias_of(&self) -> Option<ThemeId> {
        match self {
            Self::Dark => Some(Self::OneDarkPro),
            _ => None,
        }
    }

    pub(crate) fn source(&self) -> &'static ThemeSource {
        match self {
            Self::OneDarkPro | Self::Dark => &onedark::ONE_DARK,
            Self::Dracula => &dracula::DRACULA,
            Self::Night => &nightowl::NIGHT_OWL,
            Self::Emerald => &emerald::EMERALD,
            Self::Forest => &greenery::GREENERY,
            Self::Winter => &winter::WINTER,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    /// Exact match only; no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ThemeError::EmptyName);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ThemeError::NotFound { name: s.to_string() })
    }
}

/// Check every built-in table and return all defects found
pub fn validate_builtin() -> Vec<ThemeError> {
    ThemeId::ALL
        .iter()
        .filter(|id| id.alias_of().is_none())
        .filter_map(|id| id.source().to_definition(id.as_str()).err())
        .flatten()
        .collect()
}
