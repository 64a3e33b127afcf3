//! Theme definitions in the editor component's theme format.
//!
//! A [`ThemeDefinition`] is plain data: chrome colors keyed by surface name
//! plus an ordered list of token rules. Color and font-style syntax is
//! enforced by [`HexColor`] and [`FontStyle`], so a definition that exists is
//! already well-formed; [`ThemeDefinition::validate`] covers the structural
//! checks the types cannot express.

use crate::color::HexColor;
use crate::error::ThemeError;
use crate::token::TokenStyle;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Renderer-known baseline a theme inherits from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaseTheme {
    #[serde(rename = "vs")]
    Vs,
    #[default]
    #[serde(rename = "vs-dark")]
    VsDark,
    #[serde(rename = "hc-black")]
    HcBlack,
    #[serde(rename = "hc-light")]
    HcLight,
}

impl BaseTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vs => "vs",
            Self::VsDark => "vs-dark",
            Self::HcBlack => "hc-black",
            Self::HcLight => "hc-light",
        }
    }

    pub fn appearance(&self) -> Appearance {
        match self {
            Self::Vs | Self::HcLight => Appearance::Light,
            Self::VsDark | Self::HcBlack => Appearance::Dark,
        }
    }
}

impl fmt::Display for BaseTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme appearance - light or dark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

/// A complete theme definition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub inherit: bool,
    pub base: BaseTheme,
    #[serde(deserialize_with = "unique_colors")]
    pub colors: BTreeMap<String, HexColor>,
    pub rules: Vec<TokenStyle>,
    #[serde(default)]
    pub encoded_tokens_colors: Vec<String>,
}

// A JSON object may repeat a key; a theme's color keys must not
fn unique_colors<'de, D>(deserializer: D) -> Result<BTreeMap<String, HexColor>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueColors;

    impl<'de> Visitor<'de> for UniqueColors {
        type Value = BTreeMap<String, HexColor>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of surface keys to hex colors")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut colors = BTreeMap::new();
            while let Some((key, color)) = map.next_entry::<String, HexColor>()? {
                if colors.contains_key(&key) {
                    return Err(de::Error::custom(format_args!("duplicate color key '{key}'")));
                }
                colors.insert(key, color);
            }
            Ok(colors)
        }
    }

    deserializer.deserialize_map(UniqueColors)
}

/// Surface key used to decide appearance
pub const EDITOR_BACKGROUND: &str = "editor.background";

impl ThemeDefinition {
    /// Get a chrome color by surface key
    pub fn color(&self, key: &str) -> Option<HexColor> {
        self.colors.get(key).copied()
    }

    /// All rules whose selector is exactly `scope`, in declared order.
    ///
    /// Duplicates are kept: which one wins is up to how the editor applies
    /// the rule sequence.
    pub fn rules_for<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a TokenStyle> + 'a {
        self.rules.iter().filter(move |rule| rule.token == scope)
    }

    /// Light or dark, judged by the editor background when present.
    /// Falls back to the base theme's appearance.
    pub fn appearance(&self) -> Appearance {
        match self.color(EDITOR_BACKGROUND) {
            Some(bg) if bg.is_dark() => Appearance::Dark,
            Some(_) => Appearance::Light,
            None => self.base.appearance(),
        }
    }

    /// Structural checks. Returns every problem found, empty when valid.
    pub fn validate(&self, name: &str) -> Vec<ThemeError> {
        let mut errors = Vec::new();

        for key in self.colors.keys() {
            if key.trim().is_empty() {
                errors.push(ThemeError::BlankKey {
                    theme: name.to_string(),
                    field: "color key",
                });
            }
        }

        // `""` is the editor's default rule; only whitespace is rejected
        for rule in &self.rules {
            if !rule.token.is_empty() && rule.token.trim().is_empty() {
                errors.push(ThemeError::BlankKey {
                    theme: name.to_string(),
                    field: "token selector",
                });
            } else if rule.foreground.is_none() && rule.font_style.is_none() {
                errors.push(ThemeError::EmptyRule {
                    theme: name.to_string(),
                    token: rule.token.clone(),
                });
            }
        }

        errors
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a definition. Bad colors and repeated color keys fail here.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::FontStyle;

    fn sample() -> ThemeDefinition {
        let mut colors = BTreeMap::new();
        colors.insert(EDITOR_BACKGROUND.to_string(), HexColor::from_hex(0x171212));
        colors.insert(
            "editor.selectionBackground".to_string(),
            HexColor::from_rgba(0x83, 0xa0, 0x6c, 0x33),
        );
        ThemeDefinition {
            inherit: false,
            base: BaseTheme::VsDark,
            colors,
            rules: vec![
                TokenStyle::new("markup.inserted").foreground(HexColor::from_hex(0x98c379)),
                TokenStyle::new("comment").font_style(FontStyle { italic: true, ..FontStyle::NONE }),
                TokenStyle::new("markup.inserted").foreground(HexColor::from_hex(0x41a863)),
            ],
            encoded_tokens_colors: Vec::new(),
        }
    }

    #[test]
    fn json_shape_matches_editor_format() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["inherit"], false);
        assert_eq!(json["base"], "vs-dark");
        assert_eq!(json["colors"]["editor.background"], "#171212");
        assert_eq!(json["rules"][1]["fontStyle"], "italic");
        assert_eq!(json["encodedTokensColors"], serde_json::json!([]));
    }

    #[test]
    fn json_parses_back_equal() {
        let theme = sample();
        let parsed = ThemeDefinition::from_json(&theme.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn malformed_color_in_json_rejected() {
        let json = r##"{"inherit": true, "base": "vs", "colors": {"editor.background": "#fff"}, "rules": []}"##;
        let err = ThemeDefinition::from_json(json).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn unknown_base_rejected() {
        let json = r#"{"inherit": true, "base": "solarized", "colors": {}, "rules": []}"#;
        assert!(ThemeDefinition::from_json(json).is_err());
    }

    #[test]
    fn duplicate_scopes_keep_order() {
        let theme = sample();
        let inserted: Vec<_> = theme
            .rules_for("markup.inserted")
            .map(|r| r.foreground.unwrap())
            .collect();
        assert_eq!(inserted, [HexColor::from_hex(0x98c379), HexColor::from_hex(0x41a863)]);
    }

    #[test]
    fn appearance_prefers_background() {
        let mut theme = sample();
        assert_eq!(theme.appearance(), Appearance::Dark);

        // Light background on a vs-dark base still reads as light
        theme.colors.insert(EDITOR_BACKGROUND.to_string(), HexColor::from_hex(0xfffae8));
        assert_eq!(theme.appearance(), Appearance::Light);

        theme.colors.clear();
        theme.base = BaseTheme::Vs;
        assert_eq!(theme.appearance(), Appearance::Light);
    }

    #[test]
    fn validate_reports_every_problem() {
        let mut theme = sample();
        theme.colors.insert("  ".to_string(), HexColor::from_hex(0x000000));
        theme.rules.push(TokenStyle::new("  ").foreground(HexColor::from_hex(0x499504)));
        theme.rules.push(TokenStyle::new("string"));

        let errors = theme.validate("broken");
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ThemeError::EmptyRule {
            theme: "broken".into(),
            token: "string".into(),
        }));
        assert!(sample().validate("ok").is_empty());
    }

    #[test]
    fn default_rule_selector_is_valid() {
        let mut theme = sample();
        theme.rules.push(TokenStyle::new("").foreground(HexColor::from_hex(0x499504)));
        assert!(theme.validate("default").is_empty());

        // Still needs a value like any other rule
        theme.rules.push(TokenStyle::new(""));
        assert_eq!(
            theme.validate("default"),
            [ThemeError::EmptyRule { theme: "default".into(), token: "".into() }]
        );
    }

    #[test]
    fn repeated_color_key_in_json_rejected() {
        let json = r##"{
            "inherit": true,
            "base": "vs-dark",
            "colors": {"editor.background": "#000000", "editor.background": "#ffffff"},
            "rules": []
        }"##;
        match ThemeDefinition::from_json(json) {
            Err(ThemeError::Json(msg)) => assert!(msg.contains("duplicate color key 'editor.background'"), "{msg}"),
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }
}
