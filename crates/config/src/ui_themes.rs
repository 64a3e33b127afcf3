// UI theme list for the utility-CSS framework (Tailwind + daisyUI)
//
// Stock daisyUI themes are referenced by name. Custom themes extend a stock
// theme and override individual color variables. The JSON is this crate's
// own exchange format, modeled on daisyUI's `themes` array: strings for
// stock themes, `{ name: { "extends": stock, ...overrides } }` for custom
// ones. daisyUI has no `extends` key; a build step must spread the stock
// theme's variables under the overrides before handing it to daisyUI.

use std::collections::BTreeMap;

use serde::Serialize;

use edtheme_registry::{HexColor, ThemeRegistry};

/// A custom UI theme layered on a stock one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomUiTheme {
    pub name: String,
    /// Stock theme whose variables are copied first
    pub extends: String,
    /// daisyUI color variables overriding the stock values
    pub overrides: BTreeMap<String, HexColor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "UiThemeEntry")]
pub enum UiTheme {
    Stock(String),
    Custom(CustomUiTheme),
}

impl UiTheme {
    pub fn name(&self) -> &str {
        match self {
            Self::Stock(name) => name,
            Self::Custom(custom) => &custom.name,
        }
    }
}

// A bare string, or `{ name: { extends, ...overrides } }`
#[derive(Serialize)]
#[serde(untagged)]
enum UiThemeEntry {
    Stock(String),
    Custom(BTreeMap<String, CustomBody>),
}

#[derive(Serialize)]
struct CustomBody {
    extends: String,
    #[serde(flatten)]
    overrides: BTreeMap<String, HexColor>,
}

impl From<UiTheme> for UiThemeEntry {
    fn from(theme: UiTheme) -> Self {
        match theme {
            UiTheme::Stock(name) => Self::Stock(name),
            UiTheme::Custom(custom) => {
                let body = CustomBody {
                    extends: custom.extends,
                    overrides: custom.overrides,
                };
                Self::Custom(BTreeMap::from([(custom.name, body)]))
            }
        }
    }
}

/// Ordered list of UI themes offered by the web UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiThemeConfig {
    pub themes: Vec<UiTheme>,
}

impl Default for UiThemeConfig {
    fn default() -> Self {
        let stock = |name: &str| UiTheme::Stock(name.to_string());
        UiThemeConfig {
            themes: vec![
                UiTheme::Custom(CustomUiTheme {
                    name: "onedarkpro".into(),
                    extends: "dark".into(),
                    overrides: BTreeMap::from([
                        ("base-100".to_string(), HexColor::from_hex(0x282c34)),
                        ("primary".to_string(), HexColor::from_hex(0x81279c)),
                    ]),
                }),
                stock("dark"),
                stock("emerald"),
                stock("forest"),
                stock("dracula"),
                stock("night"),
                stock("lemonade"),
                stock("winter"),
            ],
        }
    }
}

impl UiThemeConfig {
    /// UI theme names in declared order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(UiTheme::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// UI themes with no editor theme of the same name
    pub fn without_editor_theme<'a>(&'a self, registry: &'a ThemeRegistry) -> impl Iterator<Item = &'a str> + 'a {
        self.names().filter(move |name| !registry.contains(name))
    }

    /// Theme list JSON; custom entries name their stock base in `extends`
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.themes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order() {
        let config = UiThemeConfig::default();
        let names: Vec<_> = config.names().collect();
        assert_eq!(
            names,
            ["onedarkpro", "dark", "emerald", "forest", "dracula", "night", "lemonade", "winter"]
        );
    }

    #[test]
    fn custom_theme_serializes_as_object() {
        let json = serde_json::to_value(&UiThemeConfig::default().themes).unwrap();
        assert_eq!(
            json[0],
            serde_json::json!({
                "onedarkpro": {"extends": "dark", "base-100": "#282c34", "primary": "#81279c"}
            })
        );
        assert_eq!(json[1], "dark");
        assert_eq!(json.as_array().unwrap().len(), 8);
    }

    #[test]
    fn only_lemonade_lacks_an_editor_theme() {
        let registry = ThemeRegistry::builtin().unwrap();
        let config = UiThemeConfig::default();
        let missing: Vec<_> = config.without_editor_theme(&registry).collect();
        assert_eq!(missing, ["lemonade"]);
    }

    #[test]
    fn contains_is_exact() {
        let config = UiThemeConfig::default();
        assert!(config.contains("lemonade"));
        assert!(!config.contains("Lemonade"));
    }
}
