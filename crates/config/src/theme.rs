// Theme selection
// Owns the fallback policy the registry deliberately leaves to callers:
// a stored preference that no longer resolves falls back to the baseline.

use std::sync::Arc;

use edtheme_registry::{ThemeDefinition, ThemeError, ThemeId, ThemeRegistry};

use crate::settings::Settings;

/// Currently selected editor theme
#[derive(Debug, Clone)]
pub struct ThemeSelection {
    registry: Arc<ThemeRegistry>,
    requested: String,
    current: Arc<ThemeDefinition>,
    current_name: String,
}

impl ThemeSelection {
    /// Resolve `requested`, falling back to [`ThemeId::DEFAULT`].
    ///
    /// Fails only when the baseline itself is missing from the registry.
    pub fn new(registry: Arc<ThemeRegistry>, requested: &str) -> Result<Self, ThemeError> {
        let (current, current_name) = Self::load_theme(&registry, requested)?;
        Ok(ThemeSelection {
            registry,
            requested: requested.to_string(),
            current,
            current_name,
        })
    }

    /// Selection for the editor theme named by `settings`
    pub fn from_settings(registry: Arc<ThemeRegistry>, settings: &Settings) -> Result<Self, ThemeError> {
        Self::new(registry, settings.editor_theme_name())
    }

    /// Get current theme definition
    pub fn theme(&self) -> &Arc<ThemeDefinition> {
        &self.current
    }

    /// Name of the theme actually in use
    pub fn name(&self) -> &str {
        &self.current_name
    }

    /// Name that was asked for
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// True when the requested name did not resolve and the baseline is shown
    pub fn fell_back(&self) -> bool {
        self.requested != self.current_name
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// Switch to `name`. An explicit choice never falls back: an unknown
    /// name leaves the selection unchanged and returns the error.
    pub fn set(&mut self, name: &str) -> Result<(), ThemeError> {
        let theme = Arc::clone(self.registry.resolve(name)?);
        self.current = theme;
        self.current_name = name.to_string();
        self.requested = name.to_string();
        Ok(())
    }

    fn load_theme(
        registry: &ThemeRegistry,
        requested: &str,
    ) -> Result<(Arc<ThemeDefinition>, String), ThemeError> {
        match registry.resolve(requested) {
            Ok(theme) => Ok((Arc::clone(theme), requested.to_string())),
            Err(e) => {
                let fallback = ThemeId::DEFAULT;
                log::warn!("{e}; falling back to '{fallback}'");
                let theme = registry.resolve_id(fallback)?;
                Ok((Arc::clone(theme), fallback.as_str().to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Arc<ThemeRegistry> {
        Arc::new(ThemeRegistry::builtin().unwrap())
    }

    #[test]
    fn known_name_is_used() {
        let selection = ThemeSelection::new(registry(), "dracula").unwrap();
        assert_eq!(selection.name(), "dracula");
        assert!(!selection.fell_back());
    }

    #[test]
    fn stale_preference_falls_back_to_dark() {
        let registry = registry();
        let selection = ThemeSelection::new(Arc::clone(&registry), "solarized").unwrap();
        assert_eq!(selection.requested(), "solarized");
        assert_eq!(selection.name(), "dark");
        assert!(selection.fell_back());
        assert!(Arc::ptr_eq(selection.theme(), registry.resolve("dark").unwrap()));
    }

    #[test]
    fn empty_preference_falls_back() {
        let selection = ThemeSelection::new(registry(), "").unwrap();
        assert_eq!(selection.name(), "dark");
    }

    #[test]
    fn ui_theme_without_editor_theme_falls_back() {
        // "lemonade" is offered by the UI but has no editor theme
        let settings = Settings { ui_theme: "lemonade".into(), editor_theme: None };
        let selection = ThemeSelection::from_settings(registry(), &settings).unwrap();
        assert!(selection.fell_back());
        assert_eq!(selection.name(), "dark");
    }

    #[test]
    fn editor_override_wins() {
        let settings = Settings { ui_theme: "forest".into(), editor_theme: Some("night".into()) };
        let selection = ThemeSelection::from_settings(registry(), &settings).unwrap();
        assert_eq!(selection.name(), "night");
    }

    #[test]
    fn explicit_set_does_not_fall_back() {
        let mut selection = ThemeSelection::new(registry(), "emerald").unwrap();
        let err = selection.set("solarized").unwrap_err();
        assert_eq!(err, ThemeError::NotFound { name: "solarized".into() });
        assert_eq!(selection.name(), "emerald");

        selection.set("winter").unwrap();
        assert_eq!(selection.name(), "winter");
        assert!(!selection.fell_back());
    }

    #[test]
    fn missing_baseline_is_an_error() {
        let bare = ThemeRegistry::builder().build().unwrap();
        let err = ThemeSelection::new(Arc::new(bare), "dracula").unwrap_err();
        assert_eq!(err, ThemeError::NotFound { name: "dark".into() });
    }
}
